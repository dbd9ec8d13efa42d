pub mod u101_create_order;

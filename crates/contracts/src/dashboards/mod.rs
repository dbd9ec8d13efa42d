pub mod d100_summary;

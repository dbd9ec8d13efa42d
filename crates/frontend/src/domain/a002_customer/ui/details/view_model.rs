use contracts::domain::a002_customer::{Customer, CustomerDto};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct CustomerFormVm {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub email: RwSignal<String>,
    pub address: RwSignal<String>,

    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl CustomerFormVm {
    pub fn new(customer: Option<&Customer>) -> Self {
        let dto = customer.map(CustomerDto::from).unwrap_or_default();
        Self {
            first_name: RwSignal::new(dto.first_name),
            last_name: RwSignal::new(dto.last_name),
            phone: RwSignal::new(dto.phone),
            email: RwSignal::new(dto.email),
            address: RwSignal::new(dto.address),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    /// Validated, trimmed body; the message goes to `error` on failure.
    pub fn build_dto(&self) -> Option<CustomerDto> {
        let dto = CustomerDto {
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            phone: self.phone.get_untracked(),
            email: self.email.get_untracked(),
            address: self.address.get_untracked(),
        }
        .trimmed();
        match dto.validate() {
            Ok(()) => {
                self.error.set(None);
                Some(dto)
            }
            Err(msg) => {
                self.error.set(Some(msg));
                None
            }
        }
    }
}

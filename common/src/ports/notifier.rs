use crate::models::order::Customer;

pub trait Notifier {
    fn notify(&self, customer: &Customer, message: &str);
}

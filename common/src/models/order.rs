/// A customer placing orders.
///
/// Fields stay private; the constructor is the only way in.
#[derive(Clone, Debug, PartialEq)]
pub struct Customer {
    name: String,
    is_premium: bool,
}

impl Customer {
    pub fn new(name: impl Into<String>, is_premium: bool) -> Self {
        Self {
            name: name.into(),
            is_premium,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_premium(&self) -> bool {
        self.is_premium
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, unit_price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    pub id: String,
    pub customer: Option<Customer>,
    pub items: Vec<Item>,
    pub total: f64,
    pub is_valid: bool,
}

impl Order {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            customer: None,
            items: Vec::new(),
            total: 0.0,
            is_valid: true,
        }
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_total(mut self, total: f64) -> Self {
        self.total = total;
        self
    }

    pub fn invalidated(mut self) -> Self {
        self.is_valid = false;
        self
    }

    /// Sum of every item's line total, before discounts and tax.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(Item::line_total).sum()
    }

    pub fn has_premium_customer(&self) -> bool {
        self.customer.as_ref().is_some_and(Customer::is_premium)
    }
}

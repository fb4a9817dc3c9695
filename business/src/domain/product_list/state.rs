use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

/// Monotonic number drawn before a list request is issued.
pub type RefreshTicket = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum ProductListEvent {
    /// A list response arrived for the request that drew `ticket`.
    Loaded {
        ticket: RefreshTicket,
        products: Vec<Product>,
    },
}

/// Last product list fetched from the service, replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductListState {
    pub products: Vec<Product>,
    pub applied_ticket: RefreshTicket,
}

impl ProductListState {
    /// Responses older than the last applied one are dropped so overlapping
    /// refreshes never roll the list back.
    pub fn apply(self, event: ProductListEvent) -> Self {
        match event {
            ProductListEvent::Loaded { ticket, products } if ticket >= self.applied_ticket => Self {
                products,
                applied_ticket: ticket,
            },
            ProductListEvent::Loaded { .. } => self,
        }
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.find(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

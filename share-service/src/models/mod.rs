pub mod design;
pub mod invoice;
pub mod line_item;
pub mod share;
pub mod totals;

pub use design::DesignOptions;
pub use invoice::{InvoiceSnapshot, Party};
pub use line_item::LineItem;
pub use share::ShareRecord;
pub use totals::{compute_totals, line_amount, InvoiceTotals};

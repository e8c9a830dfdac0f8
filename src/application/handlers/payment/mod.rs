mod record_payment;

pub use record_payment::{RecordPaymentCommand, RecordPaymentHandler, RecordPaymentResult};

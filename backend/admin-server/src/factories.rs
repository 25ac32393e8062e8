pub mod payment;

pub use payment::PaymentModelFactory;

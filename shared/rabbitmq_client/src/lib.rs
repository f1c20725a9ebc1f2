mod connection;
mod consumer;
mod producer;
mod retry;

pub use connection::{RabbitmqConnection, RabbitmqConnectionConfig};
pub use consumer::RabbitmqConsumer;
pub use producer::RabbitmqProducer;

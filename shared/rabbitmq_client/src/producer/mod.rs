mod rabbitmq_producer;
mod rabbitmq_producer_channel_callback;

pub use rabbitmq_producer::*;

mod rabbitmq_consumer;
mod rabbitmq_consumer_channel_callback;

pub use rabbitmq_consumer::*;

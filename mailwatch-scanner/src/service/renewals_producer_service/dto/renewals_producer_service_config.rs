pub struct RenewalsProducerServiceConfig {
    pub exchange: String,
}

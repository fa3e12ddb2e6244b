pub struct DefaultsConfig {
    pub target_name: String,
    pub desired_function: String,
    pub min_stability: f64,
    pub max_weight: f64,
    pub id_prefix: String,
    pub parallel: bool,
    pub pretty: bool,
    pub show_rejections: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            target_name: "EGFR (Epidermal Growth Factor Receptor)".to_string(),
            desired_function: "Allosteric inhibition of the kinase domain to prevent signaling."
                .to_string(),
            min_stability: 70.0,
            max_weight: 25.0,
            id_prefix: helixgen::engine::config::DEFAULT_ID_PREFIX.to_string(),
            parallel: true,
            pretty: true,
            show_rejections: false,
        }
    }
}

use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub catalog: CatalogSettings,
    pub news: NewsSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(serde::Deserialize, Clone)]
pub struct CatalogSettings {
    /// Where the tabular tools resource lives. Fetched once per session and
    /// re-fetched only on explicit reload.
    pub data_url: String,
    /// Substitute synthetic placeholder tools when the resource yields no
    /// valid records, instead of showing an empty listing.
    pub placeholder_fallback: bool,
}

#[derive(serde::Deserialize, Clone)]
pub struct NewsSettings {
    pub api_key: String,
    pub endpoint: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    let settings = config::Config::builder()
        .add_source(config::File::from(base_path.join("configuration.yaml")))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

use drishti_core::DrishtiConfig;

/// Id of the optional `<script type="application/json">` block holding
/// configuration overrides.
pub const CONFIG_ELEMENT_ID: &str = "drishti-config";

/// Reads overrides from the page, falling back to defaults.
pub fn load_config() -> DrishtiConfig {
    let Some(json) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content())
    else {
        return DrishtiConfig::default();
    };

    match DrishtiConfig::from_json(&json) {
        Ok(config) => {
            tracing::info!("loaded configuration overrides");
            config
        }
        Err(e) => {
            tracing::error!("{e}; using defaults");
            DrishtiConfig::default()
        }
    }
}

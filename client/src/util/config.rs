//! Build-time client configuration.
//!
//! External console URLs for the security area can be overridden at build
//! time with `MEDINSIGHT_GRAFANA_URL`, `MEDINSIGHT_LOKI_URL`,
//! `MEDINSIGHT_PROMETHEUS_URL` and `MEDINSIGHT_IDP_URL`.

use portal::navigation::ExternalLinks;

pub fn external_links() -> ExternalLinks {
    let defaults = ExternalLinks::default();
    ExternalLinks {
        grafana: option_env!("MEDINSIGHT_GRAFANA_URL").map_or(defaults.grafana, str::to_owned),
        loki: option_env!("MEDINSIGHT_LOKI_URL").map_or(defaults.loki, str::to_owned),
        prometheus: option_env!("MEDINSIGHT_PROMETHEUS_URL").map_or(defaults.prometheus, str::to_owned),
        idp: option_env!("MEDINSIGHT_IDP_URL").map_or(defaults.idp, str::to_owned),
    }
}

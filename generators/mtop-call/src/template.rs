//! Fixed-shape snippet rendering.

use mtopgen_sdk::GenerateError;
use serde_json::{Map, Value};

use crate::domain::GlobalConfig;

/// Render the final mtop call snippet.
///
/// Three global-config assignments, then an `mtop.request` call taking the
/// serialized request config and two placeholder callbacks. The config is
/// pretty-printed with 2-space indentation and re-indented two more spaces
/// to sit inside the call's argument list.
pub fn render(
    request_config: &Map<String, Value>,
    global_config: &GlobalConfig,
) -> Result<String, GenerateError> {
    let config = serde_json::to_string_pretty(request_config)?.replace('\n', "\n  ");

    Ok(format!(
        r#"mtop.config.prefix = "{prefix}";
mtop.config.subDomain = "{sub_domain}";
mtop.config.mainDomain = "{main_domain}";

mtop.request(
  {config},
  function(response) {{
    console.log("On success", response);
  }},
  function(error) {{
    console.log("On failure", error);
  }}
)"#,
        prefix = global_config.prefix,
        sub_domain = global_config.sub_domain,
        main_domain = global_config.main_domain,
        config = config,
    )
    .trim()
    .to_string())
}

//! High-level API for rendering packing instructions

use crate::defaults::{self, OutputFormat};
use crate::exceptions::Result;
use crate::protocol::{PackingInstruction, xml};
use log::debug;

/// Options for rendering an instruction
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Output format
    pub format: OutputFormat,
    /// Pretty-print JSON output (ignored for XML)
    pub pretty: bool,
}

impl RenderOptions {
    /// Options from `PACKINSTR_FORMAT` and `PACKINSTR_PRETTY`, or defaults
    pub fn from_env() -> Self {
        RenderOptions {
            format: defaults::get_output_format(),
            pretty: defaults::get_pretty(),
        }
    }
}

/// Render a packing instruction in the requested output format
pub fn render_instruction(
    instruction: &dyn PackingInstruction,
    options: &RenderOptions,
) -> Result<String> {
    let tag = instruction.tag_value();
    debug!(
        "🔧 Rendering {} as {}",
        instruction.pi_tag(),
        options.format.as_str()
    );

    let rendered = match options.format {
        OutputFormat::Xml => xml::render(&tag),
        OutputFormat::Json if options.pretty => serde_json::to_string_pretty(&tag)? + "\n",
        OutputFormat::Json => serde_json::to_string(&tag)? + "\n",
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{ENV_FORMAT, ENV_PRETTY};
    use crate::protocol::CollInp;
    use crate::utils::test_env::with_vars;
    use serial_test::serial;

    #[test]
    fn test_render_xml() {
        let coll_inp = CollInp::recursive_delete_no_force("/zone/home/alice/data").unwrap();
        let rendered = render_instruction(&coll_inp, &RenderOptions::default()).unwrap();
        assert_eq!(rendered, coll_inp.to_xml());
        assert!(rendered.starts_with("<CollInpNew_PI><collName>/zone/home/alice/data</collName>\n"));
    }

    #[test]
    fn test_render_json() {
        let coll_inp = CollInp::unregister_collection("/zone/reg", true, false).unwrap();
        let options = RenderOptions {
            format: OutputFormat::Json,
            pretty: false,
        };
        let rendered = render_instruction(&coll_inp, &options).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["name"], "CollInpNew_PI");
        assert_eq!(value["children"][0]["value"], "/zone/reg");
        assert_eq!(value["children"][1]["value"], 0);
        assert_eq!(value["children"][2]["value"], 26);
        assert_eq!(value["children"][3]["name"], "KeyValPair_PI");
        assert_eq!(value["children"][3]["children"][1]["value"], "forceFlag");
    }

    #[test]
    fn test_pretty_json_parses_to_same_value() {
        let coll_inp = CollInp::recursive_delete_with_force("/zone/x").unwrap();
        let compact = RenderOptions {
            format: OutputFormat::Json,
            pretty: false,
        };
        let pretty = RenderOptions {
            pretty: true,
            ..compact
        };

        let a: serde_json::Value =
            serde_json::from_str(&render_instruction(&coll_inp, &compact).unwrap()).unwrap();
        let b: serde_json::Value =
            serde_json::from_str(&render_instruction(&coll_inp, &pretty).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    #[serial]
    fn test_options_from_env() {
        let options = with_vars(
            &[(ENV_FORMAT, Some("json")), (ENV_PRETTY, Some("on"))],
            RenderOptions::from_env,
        );
        assert_eq!(options.format, OutputFormat::Json);
        assert!(options.pretty);

        let options = with_vars(
            &[(ENV_FORMAT, Some("toml")), (ENV_PRETTY, None)],
            RenderOptions::from_env,
        );
        assert_eq!(options.format, OutputFormat::Xml);
        assert!(!options.pretty);
    }

    #[test]
    #[serial]
    fn test_options_from_env_without_variables_are_defaults() {
        let options = with_vars(&[(ENV_FORMAT, None), (ENV_PRETTY, None)], RenderOptions::from_env);
        let defaults = RenderOptions::default();
        assert_eq!(options.format, defaults.format);
        assert_eq!(options.pretty, defaults.pretty);
    }
}

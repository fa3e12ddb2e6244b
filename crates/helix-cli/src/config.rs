mod defaults;

use crate::cli::VerifyArgs;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use helixgen::core::io::json::JsonStyle;
use helixgen::core::models::request::{DesignConstraints, DesignRequest};
use helixgen::engine::config::{VerificationConfig, VerificationConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialConstraintsConfig {
    #[serde(rename = "min-stability")]
    min_stability: Option<f64>,
    #[serde(rename = "max-weight")]
    max_weight: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialRequestConfig {
    #[serde(rename = "target-name")]
    target_name: Option<String>,
    #[serde(rename = "desired-function")]
    desired_function: Option<String>,
    constraints: Option<PartialConstraintsConfig>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialVerificationConfig {
    #[serde(rename = "id-prefix")]
    id_prefix: Option<String>,
    parallel: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    pretty: Option<bool>,
    #[serde(rename = "show-rejections")]
    show_rejections: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAppConfig {
    request: Option<PartialRequestConfig>,
    verification: Option<PartialVerificationConfig>,
    output: Option<PartialOutputConfig>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub style: JsonStyle,
    pub show_rejections: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub request: DesignRequest,
    pub verification: VerificationConfig,
    pub output: OutputConfig,
}

impl PartialAppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves every setting with precedence CLI flag > `--set` value > config file > default.
    pub fn merge_with_cli(mut self, args: &VerifyArgs) -> Result<AppConfig> {
        self.apply_set_values(&args.set_values)?;
        let defaults = DefaultsConfig::default();

        let mut request_file = self.request.take().unwrap_or_default();
        let constraints_file = request_file.constraints.take().unwrap_or_default();
        let verification_file = self.verification.take().unwrap_or_default();
        let output_file = self.output.take().unwrap_or_default();

        let min_stability = args
            .min_stability
            .or(constraints_file.min_stability)
            .unwrap_or(defaults.min_stability);
        if !(0.0..=100.0).contains(&min_stability) {
            return Err(CliError::Config(format!(
                "`request.constraints.min-stability` must be between 0 and 100, got {}",
                min_stability
            )));
        }
        let max_weight = args
            .max_weight
            .or(constraints_file.max_weight)
            .unwrap_or(defaults.max_weight);
        if !(max_weight > 0.0) {
            return Err(CliError::Config(format!(
                "`request.constraints.max-weight` must be a positive number of kDa, got {}",
                max_weight
            )));
        }

        let request = DesignRequest {
            target_name: args
                .target_name
                .clone()
                .or(request_file.target_name)
                .unwrap_or(defaults.target_name),
            desired_function: args
                .desired_function
                .clone()
                .or(request_file.desired_function)
                .unwrap_or(defaults.desired_function),
            constraints: DesignConstraints {
                min_stability,
                max_weight,
            },
        };

        let parallel = if args.sequential {
            false
        } else {
            verification_file.parallel.unwrap_or(defaults.parallel)
        };
        let verification = VerificationConfigBuilder::new()
            .id_prefix(
                args.id_prefix
                    .clone()
                    .or(verification_file.id_prefix)
                    .unwrap_or(defaults.id_prefix),
            )
            .parallel(parallel)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let pretty = if args.compact {
            false
        } else {
            output_file.pretty.unwrap_or(defaults.pretty)
        };
        let output = OutputConfig {
            style: if pretty {
                JsonStyle::Pretty
            } else {
                JsonStyle::Compact
            },
            show_rejections: args.show_rejections
                || output_file
                    .show_rejections
                    .unwrap_or(defaults.show_rejections),
        };

        Ok(AppConfig {
            request,
            verification,
            output,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "request.target-name" => {
                    self.request
                        .get_or_insert_with(Default::default)
                        .target_name = Some(value_str.to_string());
                }
                "request.desired-function" => {
                    self.request
                        .get_or_insert_with(Default::default)
                        .desired_function = Some(value_str.to_string());
                }
                "request.constraints.min-stability" => {
                    self.request
                        .get_or_insert_with(Default::default)
                        .constraints
                        .get_or_insert_with(Default::default)
                        .min_stability = Some(parse_value(key, value_str)?);
                }
                "request.constraints.max-weight" => {
                    self.request
                        .get_or_insert_with(Default::default)
                        .constraints
                        .get_or_insert_with(Default::default)
                        .max_weight = Some(parse_value(key, value_str)?);
                }
                "verification.id-prefix" => {
                    self.verification
                        .get_or_insert_with(Default::default)
                        .id_prefix = Some(value_str.to_string());
                }
                "verification.parallel" => {
                    self.verification
                        .get_or_insert_with(Default::default)
                        .parallel = Some(parse_value(key, value_str)?);
                }
                "output.pretty" => {
                    self.output.get_or_insert_with(Default::default).pretty =
                        Some(parse_value(key, value_str)?);
                }
                "output.show-rejections" => {
                    self.output
                        .get_or_insert_with(Default::default)
                        .show_rejections = Some(parse_value(key, value_str)?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str) -> Result<T> {
    value_str.trim().parse().map_err(|_| {
        CliError::Config(format!(
            "Invalid {} value for {}: {}",
            std::any::type_name::<T>(),
            key,
            value_str
        ))
    })
}

use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;

/// Settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// The Doxygen XML file to convert.
    pub input_filename: String,
    /// The library being documented, e.g. `bigtable`, or `cloud` for the
    /// common components.
    pub library: String,
    /// The version stamped into the package metadata.
    pub version: String,
}

impl Config {
    pub fn new(
        input_filename: impl Into<String>,
        library: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            input_filename: input_filename.into(),
            library: library.into(),
            version: version.into(),
        }
    }

    /// Path prefix applied to Doxygen `<location file=...>` values.
    pub fn library_root(&self) -> String {
        if self.library == "cloud" {
            return "google/cloud/".to_string();
        }
        format!("google/cloud/{}/", self.library)
    }

    /// The DocFX package name.
    pub fn package_name(&self) -> String {
        format!("google-cloud-{}", self.library)
    }
}

/// Command-line options for the converter binary.
#[derive(Debug, Clone)]
pub struct Options {
    pub config: Config,
    pub output_dir: PathBuf,
}

fn command() -> Command {
    Command::new("doxygen2docfx")
        .about("Convert Doxygen XML documentation into DocFX YAML and Markdown")
        .arg(
            Arg::new("input")
                .help("Doxygen XML file (a single compound or the combined index)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("library")
                .help("Library being documented, e.g. `bigtable` or `cloud`")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("version")
                .help("Version of the library")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .short('o')
                .help("Directory receiving the generated files")
                .default_value("."),
        )
}

/// Parses command-line arguments, the first element being the program name.
pub fn parse_arguments<I, T>(args: I) -> Result<Options>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;

    // All three positionals are required, clap has already validated them
    let get = |name: &str| -> String {
        matches
            .get_one::<String>(name)
            .cloned()
            .unwrap_or_default()
    };

    Ok(Options {
        config: Config::new(get("input"), get("library"), get("version")),
        output_dir: PathBuf::from(get("output-dir")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        let options =
            parse_arguments(["doxygen2docfx", "all.xml", "bigtable", "v2.3.0"]).unwrap();
        assert_eq!(options.config, Config::new("all.xml", "bigtable", "v2.3.0"));
        assert_eq!(options.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_parse_arguments_output_dir() {
        let options = parse_arguments([
            "doxygen2docfx",
            "all.xml",
            "cloud",
            "v2.3.0",
            "--output-dir",
            "out",
        ])
        .unwrap();
        assert_eq!(options.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_parse_arguments_missing_version() {
        assert!(parse_arguments(["doxygen2docfx", "all.xml", "bigtable"]).is_err());
    }

    #[test]
    fn test_library_root() {
        assert_eq!(Config::new("", "cloud", "").library_root(), "google/cloud/");
        assert_eq!(
            Config::new("", "spanner", "").library_root(),
            "google/cloud/spanner/"
        );
    }
}

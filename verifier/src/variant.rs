//! The closed set of target variants and the artifact naming convention.
//!
//! wasm-bindgen emits one binary per target flavor, named
//! `hello_world_<variant>_wasm_bindgen_bg.wasm`. The path for a variant is a
//! pure function of the variant and the artifact directory; adding a target
//! means adding an enum arm here and listing it in [`Variant::ALL`].

use core::fmt;
use core::str::FromStr;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Base name shared by all artifacts.
pub const ARTIFACT_BASE: &str = "hello_world";
/// Suffix wasm-bindgen appends before the extension.
pub const ARTIFACT_SUFFIX: &str = "wasm_bindgen_bg";

/// One target environment a compiled artifact exists for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Bundler,
    Web,
    Deno,
    NoModules,
    Nodejs,
}

impl Variant {
    /// The fixed verification set, in declaration order.
    pub const ALL: [Variant; 5] = [
        Variant::Bundler,
        Variant::Web,
        Variant::Deno,
        Variant::NoModules,
        Variant::Nodejs,
    ];

    /// String form used in artifact file names.
    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::Bundler => "bundler",
            Variant::Web => "web",
            Variant::Deno => "deno",
            Variant::NoModules => "nomodules",
            Variant::Nodejs => "nodejs",
        }
    }

    /// File name of this variant's artifact.
    pub fn artifact_file_name(self) -> String {
        format!("{ARTIFACT_BASE}_{}_{ARTIFACT_SUFFIX}.wasm", self.as_str())
    }

    /// Full path of this variant's artifact under `dir`.
    pub fn artifact_path(self, dir: &Path) -> PathBuf {
        dir.join(self.artifact_file_name())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for strings outside the fixed variant set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variant `{0}` (expected one of: bundler, web, deno, nomodules, nodejs)")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .iter()
            .copied()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_deterministic() {
        let dir = Path::new("/tmp/artifacts");
        for variant in Variant::ALL {
            assert_eq!(variant.artifact_path(dir), variant.artifact_path(dir));
        }
    }

    #[test]
    fn path_follows_convention() {
        let dir = Path::new("out");
        assert_eq!(
            Variant::Web.artifact_path(dir),
            Path::new("out/hello_world_web_wasm_bindgen_bg.wasm")
        );
        assert_eq!(
            Variant::NoModules.artifact_file_name(),
            "hello_world_nomodules_wasm_bindgen_bg.wasm"
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for variant in Variant::ALL {
            assert_eq!(variant.as_str().parse::<Variant>().unwrap(), variant);
        }
    }

    #[test]
    fn rejects_unknown_variant() {
        let err = "wasi".parse::<Variant>().unwrap_err();
        assert_eq!(err, UnknownVariant("wasi".to_string()));
    }
}

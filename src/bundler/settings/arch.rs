//! CPU architecture of the packaged build.

use std::path::Path;

/// CPU architecture for the packaged binaries.
///
/// The Linux pipeline always produces an x86_64 image (its deployment tools
/// are x86_64 builds). On Windows the architecture is inferred from the Qt
/// installation directory, see [`Arch::from_qt_path`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit)
    X86_64,
    /// x86 / i686 (32-bit)
    X86,
}

impl Arch {
    /// Infer the architecture from a Qt installation path.
    ///
    /// Qt's installers name their per-compiler directories with a `_64`
    /// suffix for 64-bit kits (`msvc2019_64`, `mingw81_64`) and without one
    /// for 32-bit kits (`msvc2019`, `mingw81_32`). This relies solely on that
    /// naming convention: the last five characters of the final path
    /// component are checked for `_64`. A Qt tree installed under any other
    /// name is treated as 32-bit.
    pub fn from_qt_path(qt_path: &Path) -> Self {
        let name = qt_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let chars: Vec<char> = name.chars().collect();
        let tail: String = chars[chars.len().saturating_sub(5)..].iter().collect();

        if tail.contains("_64") {
            Arch::X86_64
        } else {
            Arch::X86
        }
    }

    /// Architecture suffix used in artifact and tool file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::X86 => "i386",
        }
    }

    pub fn is_64_bit(self) -> bool {
        matches!(self, Arch::X86_64)
    }
}

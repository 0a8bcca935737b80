//! Host platform detection.
//!
//! Operating system and architecture names arrive in several spellings: the
//! JVM reports `Mac OS X` and `amd64`, while Rust's `std::env::consts` says
//! `macos` and `x86_64`. These helpers fold both families onto the catalog's
//! `<os>-<arch>` platform names. They are pure functions of their inputs so
//! callers decide where the names come from.

use super::{Catalog, PlatformDescriptor};

const ARCH_X86_64: &[&str] = &["x86_64", "x86-64", "amd64", "ia32e", "em64t", "x64"];
const ARCH_X86: &[&str] = &[
    "x86", "x86_32", "x86-32", "i386", "i486", "i586", "i686", "i86pc", "ia32", "x32",
];
const ARCH_ARM64: &[&str] = &["arm64", "aarch64", "armv8", "armv9"];
const ARCH_ARM32: &[&str] = &["arm", "arm32", "armv7", "armv7l", "aarch32"];

/// Normalise an operating system name to `windows`, `osx` or `linux`.
///
/// Darwin is matched before Windows because `darwin` contains `win`.
///
/// # Examples
///
/// ```
/// use hmcl_build_tasks::catalog::detect::normalise_os;
///
/// assert_eq!(normalise_os("Mac OS X"), Some("osx"));
/// assert_eq!(normalise_os("Windows 11"), Some("windows"));
/// assert_eq!(normalise_os("FreeBSD"), None);
/// ```
#[must_use]
pub fn normalise_os(os_name: &str) -> Option<&'static str> {
    let lower = os_name.trim().to_lowercase();
    if lower.contains("mac") || lower.contains("darwin") {
        Some("osx")
    } else if lower.contains("win") {
        Some("windows")
    } else if lower.contains("linux") || lower.contains("unix") {
        Some("linux")
    } else {
        None
    }
}

/// Normalise an architecture name to `x86_64`, `x86`, `arm64` or `arm32`.
///
/// # Examples
///
/// ```
/// use hmcl_build_tasks::catalog::detect::normalise_arch;
///
/// assert_eq!(normalise_arch("amd64"), Some("x86_64"));
/// assert_eq!(normalise_arch("AArch64"), Some("arm64"));
/// assert_eq!(normalise_arch("riscv64"), None);
/// ```
#[must_use]
pub fn normalise_arch(arch_name: &str) -> Option<&'static str> {
    let lower = arch_name.trim().to_lowercase();
    let needle = lower.as_str();
    [
        ("x86_64", ARCH_X86_64),
        ("x86", ARCH_X86),
        ("arm64", ARCH_ARM64),
        ("arm32", ARCH_ARM32),
    ]
    .into_iter()
    .find(|(_, aliases)| aliases.contains(&needle))
    .map(|(canonical, _)| canonical)
}

/// Compose the catalog platform name for an OS/architecture pair.
#[must_use]
pub fn platform_name(os_name: &str, arch_name: &str) -> Option<String> {
    let os = normalise_os(os_name)?;
    let arch = normalise_arch(arch_name)?;
    Some(format!("{os}-{arch}"))
}

impl Catalog {
    /// Find the platform matching an OS/architecture pair, if supported.
    ///
    /// # Examples
    ///
    /// ```
    /// use hmcl_build_tasks::catalog::Catalog;
    ///
    /// let catalog = Catalog::openjfx();
    /// let platform = catalog.detect_platform("Linux", "aarch64").expect("supported");
    /// assert_eq!(platform.classifier(), "linux-aarch64");
    /// assert!(catalog.detect_platform("SunOS", "sparcv9").is_none());
    /// ```
    #[must_use]
    pub fn detect_platform(&self, os_name: &str, arch_name: &str) -> Option<&PlatformDescriptor> {
        let name = platform_name(os_name, arch_name)?;
        self.platform(&name)
    }
}

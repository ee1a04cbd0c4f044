//! Host platform detection
//!
//! Detection is pure inspection: the OS identifier the binary was compiled
//! for, plus the kernel version string on Linux to tell native kernels from
//! the Windows compatibility layer (WSL ships a kernel tagged "microsoft").

use super::Platform;

/// Detect the host platform. No side effects.
pub fn detect() -> Platform {
    detect_from(std::env::consts::OS, read_kernel_version().as_deref())
}

/// Pure classification from an OS identifier and an optional kernel marker
pub fn detect_from(os: &str, kernel_version: Option<&str>) -> Platform {
    match os {
        "windows" => Platform::WindowsNative,
        "macos" => Platform::MacOs,
        "linux" => {
            let is_compat = kernel_version
                .map(|v| v.to_lowercase().contains("microsoft"))
                .unwrap_or(false);
            if is_compat {
                Platform::LinuxCompat
            } else {
                Platform::LinuxNative
            }
        }
        _ => Platform::Unknown,
    }
}

fn read_kernel_version() -> Option<String> {
    std::fs::read_to_string("/proc/version").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_windows() {
        assert_eq!(detect_from("windows", None), Platform::WindowsNative);
    }

    #[test]
    fn test_detect_macos() {
        assert_eq!(detect_from("macos", None), Platform::MacOs);
    }

    #[test]
    fn test_detect_linux_native() {
        let kernel = "Linux version 6.8.0-41-generic (buildd@lcy02) ...";
        assert_eq!(detect_from("linux", Some(kernel)), Platform::LinuxNative);
    }

    #[test]
    fn test_detect_linux_compat() {
        let kernel = "Linux version 5.15.153.1-microsoft-standard-WSL2 ...";
        assert_eq!(detect_from("linux", Some(kernel)), Platform::LinuxCompat);
    }

    #[test]
    fn test_detect_linux_compat_case_insensitive() {
        let kernel = "Linux version 4.4.0-19041-Microsoft ...";
        assert_eq!(detect_from("linux", Some(kernel)), Platform::LinuxCompat);
    }

    #[test]
    fn test_detect_linux_without_kernel_info() {
        assert_eq!(detect_from("linux", None), Platform::LinuxNative);
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(detect_from("freebsd", None), Platform::Unknown);
        assert_eq!(detect_from("", None), Platform::Unknown);
    }

    #[test]
    fn test_detect_current_host_is_supported() {
        // The test host is one of the platforms we build for
        assert!(detect().is_supported());
    }
}

//! Built-in per-platform manifests
//!
//! These are the defaults a bare `devup install` runs. A custom YAML set
//! passed via `--manifest` replaces them entirely.

use crate::manifest::{InstallTarget, Manifest, ManagerKind, ManifestSet};
use crate::platform::Platform;

fn pkg(manager: ManagerKind, name: &str, description: &str) -> InstallTarget {
    let mut target = InstallTarget::new(name, manager);
    target.metadata.description = Some(description.to_string());
    target
}

fn clone(name: &str, url: &str, dest: &str, description: &str) -> InstallTarget {
    let mut target = InstallTarget::new(name, ManagerKind::GitClone);
    target.metadata.url = Some(url.to_string());
    target.metadata.dest = Some(dest.to_string());
    target.metadata.description = Some(description.to_string());
    target
}

fn font(name: &str, url: &str, pattern: &str) -> InstallTarget {
    let mut target = InstallTarget::new(name, ManagerKind::Font);
    target.metadata.url = Some(url.to_string());
    target.metadata.pattern = Some(pattern.to_string());
    target
}

fn cargo_tool(name: &str, bin: &str, description: &str) -> InstallTarget {
    let mut target = InstallTarget::new(name, ManagerKind::Cargo);
    target.metadata.bin = Some(bin.to_string());
    target.metadata.description = Some(description.to_string());
    target
}

fn shell_manifest() -> Manifest {
    Manifest {
        name: "shell".to_string(),
        title: "Shell framework".to_string(),
        optional: false,
        targets: vec![
            clone(
                "oh-my-zsh",
                "https://github.com/ohmyzsh/ohmyzsh.git",
                "~/.oh-my-zsh",
                "Zsh configuration framework",
            ),
            clone(
                "zsh-autosuggestions",
                "https://github.com/zsh-users/zsh-autosuggestions.git",
                "~/.oh-my-zsh/custom/plugins/zsh-autosuggestions",
                "Fish-like autosuggestions for zsh",
            ),
            clone(
                "zsh-syntax-highlighting",
                "https://github.com/zsh-users/zsh-syntax-highlighting.git",
                "~/.oh-my-zsh/custom/plugins/zsh-syntax-highlighting",
                "Command highlighting for zsh",
            ),
            clone(
                "powerlevel10k",
                "https://github.com/romkatv/powerlevel10k.git",
                "~/.oh-my-zsh/custom/themes/powerlevel10k",
                "Zsh theme",
            ),
        ],
    }
}

fn fonts_manifest() -> Manifest {
    Manifest {
        name: "fonts".to_string(),
        title: "Terminal fonts".to_string(),
        optional: false,
        targets: vec![font(
            "meslo-nerd-font",
            "https://github.com/romkatv/powerlevel10k-media.git",
            "MesloLGS*.ttf",
        )],
    }
}

fn cargo_tools_manifest() -> Manifest {
    Manifest {
        name: "cargo-tools".to_string(),
        title: "Rust command-line tools".to_string(),
        optional: true,
        targets: vec![
            cargo_tool("eza", "eza", "Modern ls replacement"),
            cargo_tool("zoxide", "zoxide", "Smarter cd"),
            cargo_tool("starship", "starship", "Cross-shell prompt"),
            cargo_tool("du-dust", "dust", "Disk usage at a glance"),
        ],
    }
}

fn version_managers_manifest() -> Manifest {
    Manifest {
        name: "version-managers".to_string(),
        title: "Language version managers".to_string(),
        optional: true,
        targets: vec![
            clone(
                "nvm",
                "https://github.com/nvm-sh/nvm.git",
                "~/.nvm",
                "Node.js version manager",
            ),
            clone(
                "pyenv",
                "https://github.com/pyenv/pyenv.git",
                "~/.pyenv",
                "Python version manager",
            ),
        ],
    }
}

fn linux_core() -> Manifest {
    let apt = |name, description| pkg(ManagerKind::Apt, name, description);
    Manifest {
        name: "core".to_string(),
        title: "Core packages".to_string(),
        optional: false,
        targets: vec![
            apt("git", "Version control"),
            apt("curl", "URL transfer tool"),
            apt("zsh", "Z shell"),
            apt("tmux", "Terminal multiplexer"),
            apt("ripgrep", "Recursive grep"),
            apt("fzf", "Fuzzy finder"),
            apt("fd-find", "Friendly find"),
            apt("bat", "cat with wings"),
            apt("jq", "JSON processor"),
            apt("htop", "Process viewer"),
            apt("neovim", "Editor"),
            apt("unzip", "Archive extraction"),
            apt("fontconfig", "Font registration (fc-cache)"),
        ],
    }
}

fn macos_core() -> Manifest {
    let brew = |name, description| pkg(ManagerKind::Brew, name, description);
    Manifest {
        name: "core".to_string(),
        title: "Core packages".to_string(),
        optional: false,
        targets: vec![
            brew("git", "Version control"),
            brew("curl", "URL transfer tool"),
            brew("zsh", "Z shell"),
            brew("tmux", "Terminal multiplexer"),
            brew("ripgrep", "Recursive grep"),
            brew("fzf", "Fuzzy finder"),
            brew("fd", "Friendly find"),
            brew("bat", "cat with wings"),
            brew("jq", "JSON processor"),
            brew("htop", "Process viewer"),
            brew("neovim", "Editor"),
            pkg(ManagerKind::BrewCask, "wezterm", "GPU terminal emulator"),
        ],
    }
}

fn windows_modules() -> Manifest {
    let module = |name, description| pkg(ManagerKind::GalleryModule, name, description);
    Manifest {
        name: "modules".to_string(),
        title: "PowerShell modules".to_string(),
        optional: false,
        targets: vec![
            module("posh-git", "Git status in the prompt"),
            module("Terminal-Icons", "File icons in listings"),
            module("PSReadLine", "Line editing and history"),
        ],
    }
}

/// Built-in manifest set for a supported platform
///
/// Ordering is the dependency order the orchestrator honors: core packages
/// first (they provide git and the compilers), then shell framework and
/// fonts, then the user-gated extras.
pub fn builtin_set(platform: Platform) -> ManifestSet {
    let manifests = match platform {
        Platform::LinuxNative | Platform::LinuxCompat => vec![
            linux_core(),
            shell_manifest(),
            fonts_manifest(),
            cargo_tools_manifest(),
            version_managers_manifest(),
        ],
        Platform::MacOs => vec![
            macos_core(),
            shell_manifest(),
            fonts_manifest(),
            cargo_tools_manifest(),
            version_managers_manifest(),
        ],
        Platform::WindowsNative => vec![
            windows_modules(),
            fonts_manifest(),
            cargo_tools_manifest(),
        ],
        // Callers reject Unknown before asking for a manifest set
        Platform::Unknown => vec![],
    };
    ManifestSet { manifests }
}

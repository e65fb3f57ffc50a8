//! Platform capability lookup
//!
//! Maps an OS identifier (as reported by `std::env::consts::OS`) to the
//! executables the assistant launches on that OS. Adding a platform means
//! adding a row to `PROFILES`.

/// Executable names and reply texts for one OS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    /// OS identifier this row applies to
    pub os: &'static str,
    /// Plain text editor executable
    pub text_editor: &'static str,
    /// Reply after the editor was spawned
    pub text_editor_reply: &'static str,
    /// Calculator executable
    pub calculator: &'static str,
    /// Program that hands a URL to the default browser
    pub url_opener: &'static str,
}

const PROFILES: &[PlatformProfile] = &[
    PlatformProfile {
        os: "windows",
        text_editor: "notepad.exe",
        text_editor_reply: "Notepad opened",
        calculator: "calc.exe",
        url_opener: "explorer",
    },
    PlatformProfile {
        os: "macos",
        text_editor: "gedit",
        text_editor_reply: "Text editor opened",
        calculator: "gnome-calculator",
        url_opener: "open",
    },
];

/// Used for every OS without its own row
pub const FALLBACK_PROFILE: PlatformProfile = PlatformProfile {
    os: "*",
    text_editor: "gedit",
    text_editor_reply: "Text editor opened",
    calculator: "gnome-calculator",
    url_opener: "xdg-open",
};

/// Find the profile for an OS identifier
pub fn lookup(os: &str) -> &'static PlatformProfile {
    PROFILES
        .iter()
        .find(|profile| profile.os == os)
        .unwrap_or(&FALLBACK_PROFILE)
}

/// Profile for the OS this binary was built for
pub fn current() -> &'static PlatformProfile {
    lookup(std::env::consts::OS)
}

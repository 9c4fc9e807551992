use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Closed vocabulary of module types Waybar understands.
///
/// The tag string for each kind (`battery`, `hyprland/workspaces`, ...) is
/// the first half of a module's native id and the key its configuration is
/// written under in the native format. Keeping the vocabulary as an enum
/// lets the transformation and validation engines match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    /// Battery charge and state.
    Battery,
    /// CPU load.
    Cpu,
    /// Memory usage.
    Memory,
    /// Disk usage.
    Disk,
    /// Hardware temperature sensor.
    Temperature,
    /// Network interface status.
    Network,
    /// System load averages.
    Load,
    /// UPower device overview.
    Upower,
    /// Display backlight level.
    Backlight,
    /// PulseAudio volume and sink.
    Pulseaudio,
    /// WirePlumber volume and sink.
    Wireplumber,
    /// Bluetooth controller status.
    Bluetooth,
    /// Keyboard lock-key state.
    KeyboardState,
    /// Hyprland workspace switcher.
    HyprlandWorkspaces,
    /// Hyprland focused window title.
    HyprlandWindow,
    /// Hyprland active submap.
    HyprlandSubmap,
    /// Hyprland keyboard layout.
    HyprlandLanguage,
    /// Sway workspace switcher.
    SwayWorkspaces,
    /// Sway focused window title.
    SwayWindow,
    /// Sway binding mode.
    SwayMode,
    /// Sway keyboard layout.
    SwayLanguage,
    /// Sway scratchpad summary.
    SwayScratchpad,
    /// River tag indicator.
    RiverTags,
    /// River focused view title.
    RiverWindow,
    /// River mapping mode.
    RiverMode,
    /// River layout name.
    RiverLayout,
    /// Taskbar for wlroots compositors.
    WlrTaskbar,
    /// Niri workspace switcher.
    NiriWorkspaces,
    /// Niri focused window title.
    NiriWindow,
    /// Dwl tag indicator.
    DwlTags,
    /// Music Player Daemon status.
    Mpd,
    /// MPRIS media player status.
    Mpris,
    /// Cava audio visualizer.
    Cava,
    /// Date and time.
    Clock,
    /// System tray.
    Tray,
    /// Idle inhibitor toggle.
    IdleInhibitor,
    /// Logged-in user information.
    User,
    /// User-defined script module.
    Custom,
    /// Static or scripted image.
    Image,
    /// GameMode status.
    Gamemode,
    /// Microphone/camera privacy indicators.
    Privacy,
    /// power-profiles-daemon profile switcher.
    PowerProfilesDaemon,
    /// Failed systemd unit counter.
    SystemdFailedUnits,
    /// Grouping container for other modules.
    Group,
    /// JACK audio status.
    Jack,
    /// Sndio volume.
    Sndio,
}

/// Coarse grouping of module kinds, used for discovery and help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleCategory {
    /// System resource monitors.
    System,
    /// Hardware controls and indicators.
    Hardware,
    /// Compositor and window-manager integration.
    WindowManager,
    /// Media playback.
    Media,
    /// Everything else.
    Utility,
}

impl ModuleCategory {
    /// Human-readable category label.
    pub fn label(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Hardware => "hardware",
            Self::WindowManager => "window manager",
            Self::Media => "media",
            Self::Utility => "utility",
        }
    }
}

impl ModuleKind {
    /// Every known module kind, in display order.
    pub const ALL: &'static [ModuleKind] = &[
        Self::Battery,
        Self::Cpu,
        Self::Memory,
        Self::Disk,
        Self::Temperature,
        Self::Network,
        Self::Load,
        Self::Upower,
        Self::Backlight,
        Self::Pulseaudio,
        Self::Wireplumber,
        Self::Bluetooth,
        Self::KeyboardState,
        Self::HyprlandWorkspaces,
        Self::HyprlandWindow,
        Self::HyprlandSubmap,
        Self::HyprlandLanguage,
        Self::SwayWorkspaces,
        Self::SwayWindow,
        Self::SwayMode,
        Self::SwayLanguage,
        Self::SwayScratchpad,
        Self::RiverTags,
        Self::RiverWindow,
        Self::RiverMode,
        Self::RiverLayout,
        Self::WlrTaskbar,
        Self::NiriWorkspaces,
        Self::NiriWindow,
        Self::DwlTags,
        Self::Mpd,
        Self::Mpris,
        Self::Cava,
        Self::Clock,
        Self::Tray,
        Self::IdleInhibitor,
        Self::User,
        Self::Custom,
        Self::Image,
        Self::Gamemode,
        Self::Privacy,
        Self::PowerProfilesDaemon,
        Self::SystemdFailedUnits,
        Self::Group,
        Self::Jack,
        Self::Sndio,
    ];

    /// The native tag string Waybar uses for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Battery => "battery",
            Self::Cpu => "cpu",
            Self::Memory => "memory",
            Self::Disk => "disk",
            Self::Temperature => "temperature",
            Self::Network => "network",
            Self::Load => "load",
            Self::Upower => "upower",
            Self::Backlight => "backlight",
            Self::Pulseaudio => "pulseaudio",
            Self::Wireplumber => "wireplumber",
            Self::Bluetooth => "bluetooth",
            Self::KeyboardState => "keyboard-state",
            Self::HyprlandWorkspaces => "hyprland/workspaces",
            Self::HyprlandWindow => "hyprland/window",
            Self::HyprlandSubmap => "hyprland/submap",
            Self::HyprlandLanguage => "hyprland/language",
            Self::SwayWorkspaces => "sway/workspaces",
            Self::SwayWindow => "sway/window",
            Self::SwayMode => "sway/mode",
            Self::SwayLanguage => "sway/language",
            Self::SwayScratchpad => "sway/scratchpad",
            Self::RiverTags => "river/tags",
            Self::RiverWindow => "river/window",
            Self::RiverMode => "river/mode",
            Self::RiverLayout => "river/layout",
            Self::WlrTaskbar => "wlr/taskbar",
            Self::NiriWorkspaces => "niri/workspaces",
            Self::NiriWindow => "niri/window",
            Self::DwlTags => "dwl/tags",
            Self::Mpd => "mpd",
            Self::Mpris => "mpris",
            Self::Cava => "cava",
            Self::Clock => "clock",
            Self::Tray => "tray",
            Self::IdleInhibitor => "idle_inhibitor",
            Self::User => "user",
            Self::Custom => "custom",
            Self::Image => "image",
            Self::Gamemode => "gamemode",
            Self::Privacy => "privacy",
            Self::PowerProfilesDaemon => "power-profiles-daemon",
            Self::SystemdFailedUnits => "systemd-failed-units",
            Self::Group => "group",
            Self::Jack => "jack",
            Self::Sndio => "sndio",
        }
    }

    /// Resolves a native tag string back to a kind.
    ///
    /// Returns `None` for tags outside the known vocabulary.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.tag() == tag)
    }

    /// The category this kind belongs to.
    pub fn category(self) -> ModuleCategory {
        match self {
            Self::Battery
            | Self::Cpu
            | Self::Memory
            | Self::Disk
            | Self::Temperature
            | Self::Network
            | Self::Load
            | Self::Upower => ModuleCategory::System,
            Self::Backlight
            | Self::Pulseaudio
            | Self::Wireplumber
            | Self::Bluetooth
            | Self::KeyboardState => ModuleCategory::Hardware,
            Self::HyprlandWorkspaces
            | Self::HyprlandWindow
            | Self::HyprlandSubmap
            | Self::HyprlandLanguage
            | Self::SwayWorkspaces
            | Self::SwayWindow
            | Self::SwayMode
            | Self::SwayLanguage
            | Self::SwayScratchpad
            | Self::RiverTags
            | Self::RiverWindow
            | Self::RiverMode
            | Self::RiverLayout
            | Self::WlrTaskbar
            | Self::NiriWorkspaces
            | Self::NiriWindow
            | Self::DwlTags => ModuleCategory::WindowManager,
            Self::Mpd | Self::Mpris | Self::Cava => ModuleCategory::Media,
            Self::Clock
            | Self::Tray
            | Self::IdleInhibitor
            | Self::User
            | Self::Custom
            | Self::Image
            | Self::Gamemode
            | Self::Privacy
            | Self::PowerProfilesDaemon
            | Self::SystemdFailedUnits
            | Self::Group
            | Self::Jack
            | Self::Sndio => ModuleCategory::Utility,
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for ModuleKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for ModuleKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Self::from_tag(&tag)
            .ok_or_else(|| de::Error::custom(format!("unknown module type '{tag}'")))
    }
}

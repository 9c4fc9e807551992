//! Field schemas for every module kind.
//!
//! Each kind extends a common schema (formatting, tooltip, pointer actions)
//! with its own typed fields and defaults. The registry is an exhaustive
//! `match` over [`ModuleKind`], so adding a kind without a schema fails to
//! compile rather than at runtime.

use serde_json::{Map, Number, Value};

use crate::model::ModuleKind;

/// Expected shape of one configuration value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldType {
    /// A boolean.
    Bool,
    /// An integer, optionally range-limited (inclusive).
    Integer {
        /// Smallest accepted value.
        min: Option<i64>,
        /// Largest accepted value.
        max: Option<i64>,
    },
    /// Any number.
    Float,
    /// A string.
    Str,
    /// One of a fixed set of strings.
    Keyword(&'static [&'static str]),
    /// An integer (range-limited) or one of a fixed set of strings, like a
    /// polling interval that also accepts `"once"`.
    IntegerOrKeyword {
        /// Smallest accepted integer.
        min: Option<i64>,
        /// Accepted keyword alternatives.
        keywords: &'static [&'static str],
    },
    /// An array of strings.
    StringList,
    /// Any array.
    List,
    /// An icon set: an array of strings or a map of named icons.
    Icons,
    /// Any object.
    Object,
}

impl FieldType {
    /// Checks a value against this type, returning a human-readable
    /// complaint on mismatch.
    pub fn check(self, value: &Value) -> Result<(), String> {
        match self {
            Self::Bool => match value {
                Value::Bool(_) => Ok(()),
                other => Err(format!("expected a boolean, got {}", kind_of(other))),
            },
            Self::Integer { min, max } => check_integer(value, min, max),
            Self::Float => match value {
                Value::Number(_) => Ok(()),
                other => Err(format!("expected a number, got {}", kind_of(other))),
            },
            Self::Str => match value {
                Value::String(_) => Ok(()),
                other => Err(format!("expected a string, got {}", kind_of(other))),
            },
            Self::Keyword(keywords) => check_keyword(value, keywords),
            Self::IntegerOrKeyword { min, keywords } => match value {
                Value::String(_) => check_keyword(value, keywords),
                _ => check_integer(value, min, None),
            },
            Self::StringList => match value {
                Value::Array(items) if items.iter().all(Value::is_string) => Ok(()),
                Value::Array(_) => Err("expected an array of strings".to_string()),
                other => Err(format!("expected an array, got {}", kind_of(other))),
            },
            Self::List => match value {
                Value::Array(_) => Ok(()),
                other => Err(format!("expected an array, got {}", kind_of(other))),
            },
            Self::Icons => match value {
                Value::Array(items) if items.iter().all(Value::is_string) => Ok(()),
                Value::Object(_) => Ok(()),
                _ => Err("expected an array of icons or a map of named icons".to_string()),
            },
            Self::Object => match value {
                Value::Object(_) => Ok(()),
                other => Err(format!("expected an object, got {}", kind_of(other))),
            },
        }
    }
}

fn check_integer(value: &Value, min: Option<i64>, max: Option<i64>) -> Result<(), String> {
    let Some(number) = value.as_i64() else {
        return Err(format!("expected an integer, got {}", kind_of(value)));
    };
    if let Some(min) = min {
        if number < min {
            return Err(format!("must be at least {min}, got {number}"));
        }
    }
    if let Some(max) = max {
        if number > max {
            return Err(format!("must be at most {max}, got {number}"));
        }
    }
    Ok(())
}

fn check_keyword(value: &Value, keywords: &[&str]) -> Result<(), String> {
    match value {
        Value::String(text) if keywords.contains(&text.as_str()) => Ok(()),
        Value::String(text) => Err(format!(
            "'{text}' is not one of: {}",
            keywords.join(", ")
        )),
        other => Err(format!("expected a string, got {}", kind_of(other))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Default value carried by a field spec.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    /// Integer default.
    Int(i64),
    /// Floating-point default.
    Number(f64),
    /// Boolean default.
    Bool(bool),
    /// String default.
    Str(&'static str),
}

impl DefaultValue {
    /// The default as a JSON value.
    pub fn to_json(self) -> Value {
        match self {
            Self::Int(v) => Value::Number(v.into()),
            Self::Number(v) => Number::from_f64(v).map_or(Value::Null, Value::Number),
            Self::Bool(v) => Value::Bool(v),
            Self::Str(v) => Value::String(v.to_string()),
        }
    }
}

/// Specification of one configuration field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Native key inside the module's config object.
    pub key: &'static str,
    /// Expected value shape.
    pub ty: FieldType,
    /// Value seeded into new module instances, if any.
    pub default: Option<DefaultValue>,
}

const fn field(key: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec {
        key,
        ty,
        default: None,
    }
}

const fn with_default(key: &'static str, ty: FieldType, default: DefaultValue) -> FieldSpec {
    FieldSpec {
        key,
        ty,
        default: Some(default),
    }
}

const fn interval(default: i64) -> FieldSpec {
    with_default(
        "interval",
        FieldType::Integer {
            min: Some(1),
            max: None,
        },
        DefaultValue::Int(default),
    )
}

const INT_ANY: FieldType = FieldType::Integer {
    min: None,
    max: None,
};
const INT_POSITIVE: FieldType = FieldType::Integer {
    min: Some(1),
    max: None,
};
const INT_NON_NEGATIVE: FieldType = FieldType::Integer {
    min: Some(0),
    max: None,
};
const PERCENT: FieldType = FieldType::Integer {
    min: Some(0),
    max: Some(100),
};

/// Fields shared by every module kind: display formatting, tooltips, and
/// interactive pointer actions.
pub const COMMON_FIELDS: &[FieldSpec] = &[
    field("format", FieldType::Str),
    field("format-alt", FieldType::Str),
    field("format-icons", FieldType::Icons),
    field("tooltip", FieldType::Bool),
    field("tooltip-format", FieldType::Str),
    field("rotate", FieldType::Integer { min: Some(0), max: Some(360) }),
    field("max-length", INT_NON_NEGATIVE),
    field("min-length", INT_NON_NEGATIVE),
    field("align", FieldType::Float),
    field("justify", FieldType::Keyword(&["left", "center", "right"])),
    field("on-click", FieldType::Str),
    field("on-click-middle", FieldType::Str),
    field("on-click-right", FieldType::Str),
    field("on-scroll-up", FieldType::Str),
    field("on-scroll-down", FieldType::Str),
    field("on-update", FieldType::Str),
];

static BATTERY: &[FieldSpec] = &[
    interval(60),
    with_default("full-at", PERCENT, DefaultValue::Int(99)),
    field("bat", FieldType::Str),
    field("adapter", FieldType::Str),
    field("design-capacity", FieldType::Bool),
    field("weighted-average", FieldType::Bool),
    field("states", FieldType::Object),
    field("format-charging", FieldType::Str),
    field("format-plugged", FieldType::Str),
    field("format-full", FieldType::Str),
    field("format-time", FieldType::Str),
];

static CPU: &[FieldSpec] = &[interval(10), field("states", FieldType::Object)];

static MEMORY: &[FieldSpec] = &[interval(30), field("states", FieldType::Object)];

static DISK: &[FieldSpec] = &[
    interval(30),
    with_default("path", FieldType::Str, DefaultValue::Str("/")),
    field(
        "unit",
        FieldType::Keyword(&["kB", "kiB", "MB", "MiB", "GB", "GiB", "TB", "TiB"]),
    ),
    field("states", FieldType::Object),
];

static TEMPERATURE: &[FieldSpec] = &[
    interval(10),
    field("thermal-zone", INT_NON_NEGATIVE),
    field("hwmon-path", FieldType::Str),
    field("hwmon-path-abs", FieldType::Str),
    field("input-filename", FieldType::Str),
    field("critical-threshold", INT_ANY),
    field("format-critical", FieldType::Str),
];

static NETWORK: &[FieldSpec] = &[
    interval(60),
    field("interface", FieldType::Str),
    field("family", FieldType::Keyword(&["ipv4", "ipv6", "ipv4_6"])),
    field("format-wifi", FieldType::Str),
    field("format-ethernet", FieldType::Str),
    field("format-linked", FieldType::Str),
    field("format-disconnected", FieldType::Str),
    field("tooltip-format-wifi", FieldType::Str),
    field("tooltip-format-ethernet", FieldType::Str),
    field("tooltip-format-disconnected", FieldType::Str),
];

static LOAD: &[FieldSpec] = &[interval(10)];

static UPOWER: &[FieldSpec] = &[
    field("icon-size", INT_POSITIVE),
    field("hide-if-empty", FieldType::Bool),
    field("tooltip-spacing", INT_NON_NEGATIVE),
    field("show-icon", FieldType::Bool),
    field("native-path", FieldType::Str),
];

static BACKLIGHT: &[FieldSpec] = &[
    interval(2),
    field("device", FieldType::Str),
    with_default("scroll-step", FieldType::Float, DefaultValue::Number(1.0)),
    field("reverse-scrolling", FieldType::Bool),
];

static PULSEAUDIO: &[FieldSpec] = &[
    with_default("scroll-step", FieldType::Float, DefaultValue::Number(1.0)),
    with_default("max-volume", PERCENT, DefaultValue::Int(100)),
    field("format-muted", FieldType::Str),
    field("format-bluetooth", FieldType::Str),
    field("format-bluetooth-muted", FieldType::Str),
    field("format-source", FieldType::Str),
    field("format-source-muted", FieldType::Str),
    field("ignored-sinks", FieldType::StringList),
    field("reverse-scrolling", FieldType::Bool),
];

static WIREPLUMBER: &[FieldSpec] = &[
    with_default("scroll-step", FieldType::Float, DefaultValue::Number(1.0)),
    with_default("max-volume", PERCENT, DefaultValue::Int(100)),
    field("format-muted", FieldType::Str),
    field("node-type", FieldType::Str),
];

static BLUETOOTH: &[FieldSpec] = &[
    field("controller", FieldType::Str),
    field("format-connected", FieldType::Str),
    field("format-connected-battery", FieldType::Str),
    field("format-disabled", FieldType::Str),
    field("format-off", FieldType::Str),
    field("format-on", FieldType::Str),
    field("format-no-controller", FieldType::Str),
];

static KEYBOARD_STATE: &[FieldSpec] = &[
    interval(1),
    field("numlock", FieldType::Bool),
    field("capslock", FieldType::Bool),
    field("scrolllock", FieldType::Bool),
    field("device-path", FieldType::Str),
];

static WORKSPACES: &[FieldSpec] = &[
    field("all-outputs", FieldType::Bool),
    field("active-only", FieldType::Bool),
    field("show-special", FieldType::Bool),
    field(
        "sort-by",
        FieldType::Keyword(&["id", "name", "number", "default"]),
    ),
    field("persistent-workspaces", FieldType::Object),
];

static WINDOW: &[FieldSpec] = &[
    field("separate-outputs", FieldType::Bool),
    field("icon", FieldType::Bool),
    field("icon-size", INT_POSITIVE),
    field("rewrite", FieldType::Object),
];

static SUBMAP: &[FieldSpec] = &[
    field("always-on", FieldType::Bool),
    field("default-submap", FieldType::Str),
];

static LANGUAGE: &[FieldSpec] = &[
    field("hide-single-layout", FieldType::Bool),
    field("keyboard-name", FieldType::Str),
];

static SWAY_WORKSPACES: &[FieldSpec] = &[
    field("all-outputs", FieldType::Bool),
    field("disable-scroll", FieldType::Bool),
    field("disable-click", FieldType::Bool),
    field("current-only", FieldType::Bool),
    field("persistent-workspaces", FieldType::Object),
];

static SWAY_MODE: &[FieldSpec] = &[];

static SWAY_SCRATCHPAD: &[FieldSpec] = &[
    field("show-empty", FieldType::Bool),
    field("count-format", FieldType::Str),
];

static RIVER_TAGS: &[FieldSpec] = &[
    field("num-tags", INT_POSITIVE),
    field("tag-labels", FieldType::StringList),
    field("disable-click", FieldType::Bool),
    field("hide-vacant", FieldType::Bool),
];

static RIVER_PLAIN: &[FieldSpec] = &[];

static WLR_TASKBAR: &[FieldSpec] = &[
    with_default("icon-size", INT_POSITIVE, DefaultValue::Int(16)),
    field("icon-theme", FieldType::Str),
    field("markup", FieldType::Bool),
    field("active-first", FieldType::Bool),
    field("all-outputs", FieldType::Bool),
    field(
        "on-click",
        FieldType::Keyword(&[
            "activate",
            "minimize",
            "minimize-raise",
            "maximize",
            "fullscreen",
            "close",
        ]),
    ),
    field("ignore-list", FieldType::StringList),
];

static NIRI_WORKSPACES: &[FieldSpec] = &[
    field("all-outputs", FieldType::Bool),
    field("current-only", FieldType::Bool),
];

static DWL_TAGS: &[FieldSpec] = &[
    field("num-tags", INT_POSITIVE),
    field("tag-labels", FieldType::StringList),
    field("disable-click", FieldType::Bool),
];

static MPD: &[FieldSpec] = &[
    interval(5),
    field("server", FieldType::Str),
    with_default(
        "port",
        FieldType::Integer {
            min: Some(1),
            max: Some(65535),
        },
        DefaultValue::Int(6600),
    ),
    field("password", FieldType::Str),
    field("timeout", INT_POSITIVE),
    field("unknown-tag", FieldType::Str),
    field("format-stopped", FieldType::Str),
    field("format-paused", FieldType::Str),
    field("format-disconnected", FieldType::Str),
    field("state-icons", FieldType::Object),
    field("consume-icons", FieldType::Object),
];

static MPRIS: &[FieldSpec] = &[
    field("player", FieldType::Str),
    field("ignored-players", FieldType::StringList),
    field("format-playing", FieldType::Str),
    field("format-paused", FieldType::Str),
    field("format-stopped", FieldType::Str),
    field("player-icons", FieldType::Object),
    field("title-len", INT_NON_NEGATIVE),
    field("artist-len", INT_NON_NEGATIVE),
    field("dynamic-len", INT_NON_NEGATIVE),
];

static CAVA: &[FieldSpec] = &[
    with_default("framerate", INT_POSITIVE, DefaultValue::Int(30)),
    field("bars", INT_POSITIVE),
    field("autosens", INT_NON_NEGATIVE),
    field(
        "method",
        FieldType::Keyword(&["pulse", "pipewire", "alsa", "fifo", "sndio", "oss"]),
    ),
    field("bar_delimiter", INT_NON_NEGATIVE),
    field("hide_on_silence", FieldType::Bool),
    field("sleep_timer", INT_NON_NEGATIVE),
];

static CLOCK: &[FieldSpec] = &[
    interval(60),
    with_default("format", FieldType::Str, DefaultValue::Str("{:%H:%M}")),
    field("timezone", FieldType::Str),
    field("timezones", FieldType::StringList),
    field("locale", FieldType::Str),
    field("calendar", FieldType::Object),
    field("actions", FieldType::Object),
];

static TRAY: &[FieldSpec] = &[
    with_default("icon-size", INT_POSITIVE, DefaultValue::Int(16)),
    with_default("spacing", INT_NON_NEGATIVE, DefaultValue::Int(8)),
    field("show-passive-items", FieldType::Bool),
    field("reverse-direction", FieldType::Bool),
];

static IDLE_INHIBITOR: &[FieldSpec] = &[
    field("start-activated", FieldType::Bool),
    field("timeout", FieldType::Float),
    field("tooltip-format-activated", FieldType::Str),
    field("tooltip-format-deactivated", FieldType::Str),
];

static USER: &[FieldSpec] = &[
    interval(60),
    field("height", INT_POSITIVE),
    field("width", INT_POSITIVE),
    field("icon", FieldType::Bool),
    field("avatar", FieldType::Str),
    field("open-on-click", FieldType::Bool),
];

static CUSTOM: &[FieldSpec] = &[
    field("exec", FieldType::Str),
    field("exec-if", FieldType::Str),
    field("exec-on-event", FieldType::Bool),
    field("return-type", FieldType::Keyword(&["json"])),
    field(
        "interval",
        FieldType::IntegerOrKeyword {
            min: Some(1),
            keywords: &["once"],
        },
    ),
    field("restart-interval", INT_POSITIVE),
    field(
        "signal",
        FieldType::Integer {
            min: Some(1),
            max: Some(64),
        },
    ),
    field("hide-empty-text", FieldType::Bool),
    field("escape", FieldType::Bool),
];

static IMAGE: &[FieldSpec] = &[
    field("path", FieldType::Str),
    field("exec", FieldType::Str),
    field("size", INT_POSITIVE),
    field("interval", INT_POSITIVE),
];

static GAMEMODE: &[FieldSpec] = &[
    field("use-icon", FieldType::Bool),
    field("icon-size", INT_POSITIVE),
    field("icon-spacing", INT_NON_NEGATIVE),
    field("hide-not-running", FieldType::Bool),
    field("glyph", FieldType::Str),
];

static PRIVACY: &[FieldSpec] = &[
    with_default("icon-size", INT_POSITIVE, DefaultValue::Int(20)),
    with_default("icon-spacing", INT_NON_NEGATIVE, DefaultValue::Int(4)),
    field("transition-duration", INT_NON_NEGATIVE),
    field("modules", FieldType::List),
];

static POWER_PROFILES_DAEMON: &[FieldSpec] = &[];

static SYSTEMD_FAILED_UNITS: &[FieldSpec] = &[
    interval(5),
    field("format-ok", FieldType::Str),
    field("hide-on-ok", FieldType::Bool),
    field("system", FieldType::Bool),
    field("user", FieldType::Bool),
];

static GROUP: &[FieldSpec] = &[
    field(
        "orientation",
        FieldType::Keyword(&["horizontal", "vertical", "inherit", "orthogonal"]),
    ),
    field("modules", FieldType::List),
    field("drawer", FieldType::Object),
];

static JACK: &[FieldSpec] = &[
    field("realtime", FieldType::Bool),
    field("format-connected", FieldType::Str),
    field("format-disconnected", FieldType::Str),
];

static SNDIO: &[FieldSpec] = &[with_default(
    "scroll-step",
    FieldType::Float,
    DefaultValue::Number(5.0),
)];

/// The schema for one module kind: common fields plus its own.
#[derive(Debug, Clone, Copy)]
pub struct ModuleSchema {
    /// The kind this schema describes.
    pub kind: ModuleKind,
    /// Kind-specific fields layered over [`COMMON_FIELDS`].
    pub fields: &'static [FieldSpec],
}

impl ModuleSchema {
    /// Common and kind-specific fields together. Kind-specific fields win
    /// when a key appears in both (e.g. `clock` redefines `format` with a
    /// default).
    pub fn all_fields(&self) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        self.fields.iter().chain(
            COMMON_FIELDS
                .iter()
                .filter(|common| !self.fields.iter().any(|own| own.key == common.key)),
        )
    }

    /// Looks up the spec for one key.
    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.all_fields().find(|spec| spec.key == key)
    }

    /// Configuration seeded into a newly added module of this kind.
    pub fn default_config(&self) -> Map<String, Value> {
        let mut config = Map::new();
        for spec in self.all_fields() {
            if let Some(default) = spec.default {
                config.insert(spec.key.to_string(), default.to_json());
            }
        }
        config
    }
}

/// The schema registered for a module kind.
pub fn module_schema(kind: ModuleKind) -> ModuleSchema {
    use ModuleKind as K;

    let fields: &'static [FieldSpec] = match kind {
        K::Battery => BATTERY,
        K::Cpu => CPU,
        K::Memory => MEMORY,
        K::Disk => DISK,
        K::Temperature => TEMPERATURE,
        K::Network => NETWORK,
        K::Load => LOAD,
        K::Upower => UPOWER,
        K::Backlight => BACKLIGHT,
        K::Pulseaudio => PULSEAUDIO,
        K::Wireplumber => WIREPLUMBER,
        K::Bluetooth => BLUETOOTH,
        K::KeyboardState => KEYBOARD_STATE,
        K::HyprlandWorkspaces => WORKSPACES,
        K::HyprlandWindow => WINDOW,
        K::HyprlandSubmap => SUBMAP,
        K::HyprlandLanguage => LANGUAGE,
        K::SwayWorkspaces => SWAY_WORKSPACES,
        K::SwayWindow => WINDOW,
        K::SwayMode => SWAY_MODE,
        K::SwayLanguage => LANGUAGE,
        K::SwayScratchpad => SWAY_SCRATCHPAD,
        K::RiverTags => RIVER_TAGS,
        K::RiverWindow => RIVER_PLAIN,
        K::RiverMode => RIVER_PLAIN,
        K::RiverLayout => RIVER_PLAIN,
        K::WlrTaskbar => WLR_TASKBAR,
        K::NiriWorkspaces => NIRI_WORKSPACES,
        K::NiriWindow => WINDOW,
        K::DwlTags => DWL_TAGS,
        K::Mpd => MPD,
        K::Mpris => MPRIS,
        K::Cava => CAVA,
        K::Clock => CLOCK,
        K::Tray => TRAY,
        K::IdleInhibitor => IDLE_INHIBITOR,
        K::User => USER,
        K::Custom => CUSTOM,
        K::Image => IMAGE,
        K::Gamemode => GAMEMODE,
        K::Privacy => PRIVACY,
        K::PowerProfilesDaemon => POWER_PROFILES_DAEMON,
        K::SystemdFailedUnits => SYSTEMD_FAILED_UNITS,
        K::Group => GROUP,
        K::Jack => JACK,
        K::Sndio => SNDIO,
    };

    ModuleSchema { kind, fields }
}

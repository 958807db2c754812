use crate::models::HeaderProp;
use serde::Serialize;
use std::fmt;

/// The online platform a player joined the match from. The discriminants are the codes used
/// throughout the replay format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
pub enum Platform {
    #[default]
    Unknown = 0,
    Steam = 1,
    PlayStation = 2,
    Xbox = 4,
    Switch = 6,
}

/// Every spelling of a platform seen across game versions: display names, api names, the
/// `OnlinePlatform` enum, the stringified enum of old replays, and numeric codes.
static PLATFORMS: phf::Map<&'static str, Platform> = phf::phf_map! {
    "unknown" => Platform::Unknown,
    "Unknown" => Platform::Unknown,
    "steam" => Platform::Steam,
    "Steam" => Platform::Steam,
    "PlayStation" => Platform::PlayStation,
    "playstation" => Platform::PlayStation,
    "ps4" => Platform::PlayStation,
    "Xbox" => Platform::Xbox,
    "xbox" => Platform::Xbox,
    "xboxone" => Platform::Xbox,
    "switch" => Platform::Switch,
    "Switch" => Platform::Switch,
    "OnlinePlatform_Unknown" => Platform::Unknown,
    "OnlinePlatform_Steam" => Platform::Steam,
    "OnlinePlatform_PS4" => Platform::PlayStation,
    "OnlinePlatform_Dingo" => Platform::Xbox,
    "OnlinePlatform_NNX" => Platform::Switch,
    "{'Value': ['OnlinePlatform', 'OnlinePlatform_Unknown']}" => Platform::Unknown,
    "{'Value': ['OnlinePlatform', 'OnlinePlatform_Steam']}" => Platform::Steam,
    "{'Value': ['OnlinePlatform', 'OnlinePlatform_PS4']}" => Platform::PlayStation,
    "{'Value': ['OnlinePlatform', 'OnlinePlatform_Dingo']}" => Platform::Xbox,
    "0" => Platform::Unknown,
    "1" => Platform::Steam,
    "2" => Platform::PlayStation,
    "4" => Platform::Xbox,
    "6" => Platform::Switch,
};

impl Platform {
    /// Normalizes any known spelling of a platform. Unrecognized names are `Unknown`.
    ///
    /// ```
    /// # use rlreplay::Platform;
    /// assert_eq!(Platform::from_name("OnlinePlatform_Dingo"), Platform::Xbox);
    /// assert_eq!(Platform::from_name("ps4"), Platform::PlayStation);
    /// assert_eq!(Platform::from_name("Stadia"), Platform::Unknown);
    /// ```
    pub fn from_name(name: &str) -> Platform {
        PLATFORMS.get(name.trim()).copied().unwrap_or_default()
    }

    /// Normalizes a numeric platform code. Codes that don't name a platform are `Unknown`.
    pub fn from_code(code: i64) -> Platform {
        match code {
            1 => Platform::Steam,
            2 => Platform::PlayStation,
            4 => Platform::Xbox,
            6 => Platform::Switch,
            _ => Platform::Unknown,
        }
    }

    /// Normalizes the platform stored in a header property, whatever shape it was written in.
    /// The byte enum of some replays stores the value in place of the enum name.
    pub fn from_header(prop: &HeaderProp) -> Platform {
        match prop {
            HeaderProp::Byte { kind, value } => {
                Platform::from_name(value.as_deref().unwrap_or(kind))
            }
            HeaderProp::Int(code) => Platform::from_code(i64::from(*code)),
            HeaderProp::QWord(code) => i64::try_from(*code)
                .map(Platform::from_code)
                .unwrap_or_default(),
            HeaderProp::Str(name) | HeaderProp::Name(name) => Platform::from_name(name),
            _ => Platform::Unknown,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// The lower-case name the platform goes by in stat apis
    pub fn api_name(self) -> &'static str {
        match self {
            Platform::Unknown => "unknown",
            Platform::Steam => "steam",
            Platform::PlayStation => "ps4",
            Platform::Xbox => "xboxone",
            Platform::Switch => "switch",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Unknown => "Unknown",
            Platform::Steam => "Steam",
            Platform::PlayStation => "PlayStation",
            Platform::Xbox => "Xbox",
            Platform::Switch => "Switch",
        };
        f.write_str(name)
    }
}

//! Closed enumerations and fixed reference data.
//!
//! Every enumeration pairs each member with a fixed integer value and a
//! SCREAMING_SNAKE_CASE name. The name is the stored form: the tagged codec
//! writes `Status::Active` as `"ACTIVE"`.

use std::fmt;
use std::str::FromStr;

/// Error returned when a name or value does not match any enum member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub enum_name: &'static str,
    pub value: String,
}

impl std::error::Error for ParseEnumError {}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a member of {}", self.value, self.enum_name)
    }
}

/// Macro to define a closed enumeration with fixed value/name pairs.
macro_rules! define_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident = $value:literal => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u8)]
        pub enum $name {
            $(
                $variant = $value,
            )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The stored SCREAMING_SNAKE_CASE name.
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// The fixed integer value.
            pub const fn value(self) -> u8 {
                self as u8
            }

            /// Look up a member by its exact stored name.
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|member| member.name() == name)
            }

            /// Look up a member by its integer value.
            pub fn from_value(value: u8) -> Option<Self> {
                Self::ALL.iter().copied().find(|member| member.value() == value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| ParseEnumError {
                    enum_name: stringify!($name),
                    value: s.to_string(),
                })
            }
        }
    };
}

define_enum!(
    /// Day of the week a time slot falls on.
    DayOfWeek {
        Monday = 1 => "MONDAY",
        Tuesday = 2 => "TUESDAY",
        Wednesday = 3 => "WEDNESDAY",
        Thursday = 4 => "THURSDAY",
        Friday = 5 => "FRIDAY",
        Saturday = 6 => "SATURDAY",
        Sunday = 7 => "SUNDAY",
    }
);

define_enum!(
    /// How often a time slot recurs.
    Repetition {
        Weekly = 1 => "WEEKLY",
        BiweeklyOdd = 2 => "BIWEEKLY_ODD",
        BiweeklyEven = 3 => "BIWEEKLY_EVEN",
    }
);

define_enum!(
    Sex {
        Male = 1 => "MALE",
        Female = 2 => "FEMALE",
        NonBinary = 3 => "NON_BINARY",
    }
);

define_enum!(
    /// Enrollment status of a student.
    Status {
        Active = 1 => "ACTIVE",
        Inactive = 2 => "INACTIVE",
        Graduated = 3 => "GRADUATED",
    }
);

/// Recognized provincial-level administrative regions.
pub const PROVINCES: [&str; 34] = [
    "Beijing",
    "Tianjin",
    "Shanghai",
    "Chongqing",
    "Hebei",
    "Shanxi",
    "Liaoning",
    "Jilin",
    "Heilongjiang",
    "Jiangsu",
    "Zhejiang",
    "Anhui",
    "Fujian",
    "Jiangxi",
    "Shandong",
    "Henan",
    "Hubei",
    "Hunan",
    "Guangdong",
    "Guangxi",
    "Hainan",
    "Sichuan",
    "Guizhou",
    "Yunnan",
    "Tibet",
    "Shaanxi",
    "Gansu",
    "Qinghai",
    "Ningxia",
    "Xinjiang",
    "Inner Mongolia",
    "Hong Kong",
    "Macau",
    "Taiwan",
];

/// Whether `province` is one of [`PROVINCES`] (exact, case-sensitive).
pub fn is_recognized_province(province: &str) -> bool {
    PROVINCES.contains(&province)
}

//! Built-in rules for common parameter validation scenarios

pub mod bounds;
pub mod custom;
pub mod emptiness;
pub mod enums;
pub mod format;
pub mod list;
pub mod paginate;
pub mod pattern;
pub mod presence;
pub mod slice;
pub mod transform;
pub mod types;

pub use bounds::{BetweenRule, LengthRule};
pub use custom::CustomRule;
pub use emptiness::{EmptyStringRule, OmitEmptyRule};
pub use enums::{EnumIntRule, EnumStringRule};
pub use format::{DateRule, DatetimeRule, EmailRule, Ipv4Rule, PhoneRule, UrlRule};
pub use list::{DotIntRule, DotIntToSliceRule, MaxdotRule};
pub use paginate::PaginateRule;
pub use pattern::RegexRule;
pub use presence::{OptionalRule, RequiredRule};
pub use slice::{IntSliceRule, StringSliceRule};
pub use transform::{RemoveEmojiRule, ResetKeyRule, XssRule};
pub use types::{BooleanRule, FloatRule, IntRule, StringRule};

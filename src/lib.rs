// General-purpose helpers grouped by topic. Each module stands alone; the
// re-exports below are the flat surface most callers use.
pub mod app_dirs;
pub mod arrays;
pub mod async_utils;
pub mod auth;
pub mod config;
pub mod control;
pub mod currency;
pub mod dates;
pub mod env;
pub mod error;
pub mod fetch;
pub mod fs;
pub mod images;
pub mod json;
pub mod logging;
pub mod names;
pub mod naming;
pub mod numbers;
pub mod objects;
pub mod safety;
pub mod strings;
pub mod switch;
pub mod timing;

pub use arrays::{
    all_except, bulk_remove_from_array, bulk_update_in_array, clear_array, find_in_array,
    find_index_in_array, remove_at, remove_from_array, require_in_array, update_in_array, Field,
};
pub use async_utils::try_catch_async;
pub use auth::{
    compare_password, generate_random_password, has_role, hash_password, is_strong_password,
    is_valid_email, uuid_v4, validate_domain, BcryptPasswordHasher, PasswordHasher,
};
pub use config::{ConfigStore, FileConfigStore, LogEnv, LogLevel, LogLocation, LoggerContext};
pub use control::{attempt, branch, do_if, if_valid, repeat_until, unless};
pub use currency::{
    calculate_tax, calculate_total_with_tax, convert_currency, format_currency,
    get_tax_rate_by_state, parse_currency,
};
pub use dates::{date_from_string, get_time_ago, is_same_day};
pub use env::get_env;
pub use error::{Result, UtilError};
pub use fetch::{pro_fetch_get, pro_fetch_post, FetchError, QueryParam};
pub use fs::{dir_exists, verify_app_directories};
pub use images::{get_aspect_ratio, get_height_from_ar, get_width_from_ar};
pub use json::json_safe_get;
pub use logging::{init_tracing, LevelMessages, LogMessage, LogMessages, LogTemplate, Logger};
pub use names::{format_name_with_prefix, merge_full_name, split_full_name, Name};
pub use naming::{compound_name_from, identify_naming_convention, NamingConvention};
pub use numbers::{clamp, clamp_to_default_range, format_percent_string, gen_random_in_range};
pub use objects::{get_keys, get_keys_joined, get_values, get_values_joined, obj_to_iterable, KvPair};
pub use safety::{
    assert_that, err, is_array_of, is_boolean, is_email, is_iso_date, is_nullish, is_number,
    is_record_of, is_string, is_uuid, is_valid, none, ok, require_value, some, unwrap_or,
    unwrap_result, validate_email, Maybe, Outcome, ValidationResult,
};
pub use strings::{capitalize, pluralize};
pub use switch::{pro_switch, pro_switch_return, ReturnCase, SwitchCase};
pub use timing::{debounce, measure_performance, throttle, wait, Debounced, Throttled};

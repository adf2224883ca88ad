// src/protocol/constants.rs
// Protocol constants that must match the server byte for byte

use super::tag::TagName;

// Packing instruction root tags
pub const COLL_INP_PI: TagName = TagName::from_static("CollInpNew_PI");
pub const KEYVAL_PAIR_PI: TagName = TagName::from_static("KeyValPair_PI");

// CollInpNew_PI fields
pub const COLL_NAME: TagName = TagName::from_static("collName");
pub const FLAGS: TagName = TagName::from_static("flags");
pub const OPR_TYPE: TagName = TagName::from_static("oprType");

// KeyValPair_PI fields
pub const SS_LEN: TagName = TagName::from_static("ssLen");
pub const KEYWORD: TagName = TagName::from_static("keyWord");
pub const SVALUE: TagName = TagName::from_static("svalue");

// Keywords carried in the key/value extension block
pub const FORCE_FLAG_KW: &str = "forceFlag";
pub const RECURSIVE_OPR_KW: &str = "recursiveOpr";

// The flags slot of CollInpNew_PI is always sent as zero
pub const FLAGS_NONE: i64 = 0;

// oprType discriminators
pub const OPR_TYPE_DEFAULT: i64 = 0;
pub const OPR_TYPE_UNREGISTER: i64 = 26; // UNREG_OPR on the server

// API numbers used by the dispatch layer when sending a CollInpNew_PI body
pub const MKDIR_API_NBR: i32 = 681; // COLL_CREATE_AN
pub const RMDIR_API_NBR: i32 = 679; // RM_COLL_AN

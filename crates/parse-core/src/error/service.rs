//! Service-defined error codes.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// An error reported by the Parse service.
///
/// Values for codes in the catalog are the fixed constants below; anything
/// else carries the code and message exactly as the service sent them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceError {
    /// Numeric error code.
    pub code: i32,
    /// Human-readable message.
    #[serde(rename = "error")]
    pub message: Cow<'static, str>,
}

impl ServiceError {
    /// Create an error with a code the catalog may not know.
    pub fn new(code: i32, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    const fn known(code: i32, message: &'static str) -> Self {
        Self {
            code,
            message: Cow::Borrowed(message),
        }
    }

    /// Look up the catalog entry for a code.
    pub fn by_code(code: i32) -> Option<ServiceError> {
        CATALOG.get(&code).cloned()
    }

    /// Iterate the reachable catalog entries, one per code.
    pub fn catalog() -> impl Iterator<Item = &'static ServiceError> {
        CATALOG.values()
    }

    /// Returns true if this value is the catalog entry for its code.
    pub fn is_known(&self) -> bool {
        CATALOG.get(&self.code) == Some(self)
    }

    /// Fallback when an error body cannot be decoded.
    pub const UNKNOWN: ServiceError = Self::known(1, "An unknown error occurred");

    pub const ACCOUNT_ALREADY_LINKED: ServiceError =
        Self::known(208, "An existing account already linked to another user.");
    pub const CACHE_MISS: ServiceError =
        Self::known(120, "The results were not found in the cache.");
    pub const COMMAND_UNAVAILABLE: ServiceError =
        Self::known(108, "Tried to access a feature only available internally.");
    pub const CONNECTION_FAILED: ServiceError =
        Self::known(100, "The connection to the Parse servers failed.");
    pub const DUPLICATE_VALUE: ServiceError =
        Self::known(137, "A unique field was given a value that is already taken.");
    pub const EXCEEDED_QUOTA: ServiceError =
        Self::known(140, "Exceeded an application quota. Upgrade to resolve.");
    pub const FACEBOOK_ACCOUNT_ALREADY_LINKED: ServiceError = Self::known(
        208,
        "An existing Facebook account already linked to another user.",
    );
    pub const FACEBOOK_ID_MISSING: ServiceError =
        Self::known(250, "Facebook id missing from request");
    pub const FACEBOOK_INVALID_SESSION: ServiceError =
        Self::known(251, "Invalid Facebook session");
    pub const FILE_DELETE_FAILURE: ServiceError = Self::known(153, "Fail to delete file.");
    pub const INCORRECT_TYPE: ServiceError = Self::known(111, "Field set to incorrect type.");
    pub const INTERNAL_SERVER: ServiceError =
        Self::known(1, "Internal server error. No information available.");
    pub const INVALID_ACL: ServiceError = Self::known(
        123,
        "Invalid ACL. An ACL with an invalid format was saved. This should not happen if you use PFACL.",
    );
    pub const INVALID_CHANNEL_NAME: ServiceError = Self::known(
        112,
        "Invalid channel name. A channel name is either an empty string (the broadcast channel) or contains only a-zA-Z0-9_ characters and starts with a letter.",
    );
    pub const INVALID_CLASS_NAME: ServiceError = Self::known(
        103,
        "Missing or invalid classname. Classnames are case-sensitive. They must start with a letter, and a-zA-Z0-9_ are the only valid characters.",
    );
    pub const INVALID_DEVICE_TOKEN: ServiceError = Self::known(114, "Invalid device token.");
    pub const INVALID_EMAIL_ADDRESS: ServiceError =
        Self::known(125, "The email address was invalid.");
    pub const INVALID_FILE_NAME: ServiceError = Self::known(
        122,
        "Invalid file name. A file name contains only a-zA-Z0-9_. characters and is between 1 and 36 characters.",
    );
    pub const INVALID_IMAGE_DATA: ServiceError =
        Self::known(150, "Fail to convert data to image.");
    pub const INVALID_JSON: ServiceError =
        Self::known(107, "Malformed json object. A json dictionary is expected.");
    pub const INVALID_KEY_NAME: ServiceError = Self::known(
        105,
        "Invalid key name. Keys are case-sensitive. They must start with a letter, and a-zA-Z0-9_ are the only valid characters.",
    );
    pub const INVALID_LINKED_SESSION: ServiceError = Self::known(251, "Invalid linked session");
    pub const INVALID_NESTED_KEY: ServiceError = Self::known(121, "Keys may not include '$' or '.'.");
    pub const INVALID_POINTER: ServiceError = Self::known(
        106,
        "Malformed pointer. Pointers must be arrays of a classname and an object id.",
    );
    pub const INVALID_PRODUCT_IDENTIFIER: ServiceError =
        Self::known(146, "The product identifier is invalid");
    pub const INVALID_PURCHASE_RECEIPT: ServiceError =
        Self::known(144, "Product purchase receipt is invalid");
    pub const INVALID_QUERY: ServiceError = Self::known(
        102,
        "You tried to find values matching a datatype that doesn't support exact database matching, like an array or a dictionary.",
    );
    pub const INVALID_ROLE_NAME: ServiceError = Self::known(139, "Role's name is invalid.");
    pub const INVALID_SERVER_RESPONSE: ServiceError =
        Self::known(148, "The Apple server response is not valid");
    pub const LINKED_ID_MISSING: ServiceError = Self::known(250, "Linked id missing from request");
    pub const MISSING_OBJECT_ID: ServiceError = Self::known(104, "Missing object id.");
    pub const OBJECT_NOT_FOUND: ServiceError =
        Self::known(101, "Object doesn't exist, or has an incorrect password.");
    pub const OBJECT_TOO_LARGE: ServiceError = Self::known(116, "The object is too large.");
    pub const OPERATION_FORBIDDEN: ServiceError =
        Self::known(119, "That operation isn't allowed for clients.");
    pub const PAYMENT_DISABLED: ServiceError =
        Self::known(145, "Payment is disabled on this device");
    pub const PRODUCT_DOWNLOAD_FILE_SYSTEM_FAILURE: ServiceError =
        Self::known(149, "Product fails to download due to file system error");
    pub const PRODUCT_NOT_FOUND_IN_APP_STORE: ServiceError =
        Self::known(147, "The product is not found in the App Store");
    pub const PUSH_MISCONFIGURED: ServiceError =
        Self::known(115, "Push is misconfigured. See details to find out how.");
    pub const RECEIPT_MISSING: ServiceError =
        Self::known(143, "Product purchase receipt is missing");
    pub const TIMEOUT: ServiceError = Self::known(
        124,
        "The request timed out on the server. Typically this indicates the request is too expensive.",
    );
    pub const UNSAVED_FILE: ServiceError = Self::known(151, "Unsaved file.");
    pub const USER_CANNOT_BE_ALTERED_WITHOUT_SESSION: ServiceError = Self::known(
        206,
        "The user cannot be altered by a client without the session.",
    );
    pub const USER_CAN_ONLY_BE_CREATED_THROUGH_SIGN_UP: ServiceError =
        Self::known(207, "Users can only be created through sign up");
    pub const USER_EMAIL_MISSING: ServiceError =
        Self::known(204, "The email is missing, and must be specified");
    pub const USER_EMAIL_TAKEN: ServiceError = Self::known(203, "Email has already been taken");
    pub const USER_ID_MISMATCH: ServiceError = Self::known(209, "User ID mismatch");
    pub const USERNAME_MISSING: ServiceError = Self::known(200, "Username is missing or empty");
    pub const USERNAME_TAKEN: ServiceError = Self::known(202, "Username has already been taken");
    pub const USER_PASSWORD_MISSING: ServiceError =
        Self::known(201, "Password is missing or empty");
    pub const USER_WITH_EMAIL_NOT_FOUND: ServiceError =
        Self::known(205, "A user with the specified email was not found");
    pub const SCRIPT_ERROR: ServiceError = Self::known(141, "Cloud Code script had an error.");
    pub const VALIDATION_ERROR: ServiceError = Self::known(142, "Cloud Code validation failed.");
}

/// Shared codes (208, 250, 251) resolve to the entry registered first.
/// Entries are registered alphabetically by constant name, so 208 is
/// `ACCOUNT_ALREADY_LINKED` while 250 and 251 are the Facebook entries.
static CATALOG: Lazy<HashMap<i32, ServiceError>> = Lazy::new(|| {
    let entries = [
        ServiceError::ACCOUNT_ALREADY_LINKED,
        ServiceError::CACHE_MISS,
        ServiceError::COMMAND_UNAVAILABLE,
        ServiceError::CONNECTION_FAILED,
        ServiceError::DUPLICATE_VALUE,
        ServiceError::EXCEEDED_QUOTA,
        ServiceError::FACEBOOK_ACCOUNT_ALREADY_LINKED,
        ServiceError::FACEBOOK_ID_MISSING,
        ServiceError::FACEBOOK_INVALID_SESSION,
        ServiceError::FILE_DELETE_FAILURE,
        ServiceError::INCORRECT_TYPE,
        ServiceError::INTERNAL_SERVER,
        ServiceError::INVALID_ACL,
        ServiceError::INVALID_CHANNEL_NAME,
        ServiceError::INVALID_CLASS_NAME,
        ServiceError::INVALID_DEVICE_TOKEN,
        ServiceError::INVALID_EMAIL_ADDRESS,
        ServiceError::INVALID_FILE_NAME,
        ServiceError::INVALID_IMAGE_DATA,
        ServiceError::INVALID_JSON,
        ServiceError::INVALID_KEY_NAME,
        ServiceError::INVALID_LINKED_SESSION,
        ServiceError::INVALID_NESTED_KEY,
        ServiceError::INVALID_POINTER,
        ServiceError::INVALID_PRODUCT_IDENTIFIER,
        ServiceError::INVALID_PURCHASE_RECEIPT,
        ServiceError::INVALID_QUERY,
        ServiceError::INVALID_ROLE_NAME,
        ServiceError::INVALID_SERVER_RESPONSE,
        ServiceError::LINKED_ID_MISSING,
        ServiceError::MISSING_OBJECT_ID,
        ServiceError::OBJECT_NOT_FOUND,
        ServiceError::OBJECT_TOO_LARGE,
        ServiceError::OPERATION_FORBIDDEN,
        ServiceError::PAYMENT_DISABLED,
        ServiceError::PRODUCT_DOWNLOAD_FILE_SYSTEM_FAILURE,
        ServiceError::PRODUCT_NOT_FOUND_IN_APP_STORE,
        ServiceError::PUSH_MISCONFIGURED,
        ServiceError::RECEIPT_MISSING,
        ServiceError::TIMEOUT,
        ServiceError::UNSAVED_FILE,
        ServiceError::USER_CANNOT_BE_ALTERED_WITHOUT_SESSION,
        ServiceError::USER_CAN_ONLY_BE_CREATED_THROUGH_SIGN_UP,
        ServiceError::USER_EMAIL_MISSING,
        ServiceError::USER_EMAIL_TAKEN,
        ServiceError::USER_ID_MISMATCH,
        ServiceError::USERNAME_MISSING,
        ServiceError::USERNAME_TAKEN,
        ServiceError::USER_PASSWORD_MISSING,
        ServiceError::USER_WITH_EMAIL_NOT_FOUND,
        ServiceError::SCRIPT_ERROR,
        ServiceError::VALIDATION_ERROR,
    ];

    let mut catalog = HashMap::with_capacity(entries.len());
    for entry in entries {
        catalog.entry(entry.code).or_insert(entry);
    }
    catalog
});

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for ServiceError {}

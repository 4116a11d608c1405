pub const CONFIG_SCRIPT_ID: &str = "gatekeeper-config";

pub const FORM_SELECTOR: &str = "form";
pub const SUBMIT_SELECTOR: &str = r#"button[type="submit"]"#;
pub const RESET_SELECTOR: &str = r#"button[type="reset"]"#;
pub const FILE_INPUT_SELECTOR: &str = r#"input[type="file"]"#;
pub const NUMBER_INPUT_SELECTOR: &str = r#"input[type="number"]"#;
pub const FRAGMENT_ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;
pub const ALERT_SELECTOR: &str = ".alert";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const TABLE_ROW_SELECTOR: &str = "tr";
pub const TABLE_CELL_SELECTOR: &str = "td, th";
pub const NOTIFICATION_CONTAINER_SELECTOR: &str = ".container";

pub const CUSTOM_FILE_INPUT_CLASS: &str = "custom-file-input";
pub const FILE_WRAPPER_SELECTOR: &str = ".file-upload-wrapper";
pub const FILE_NAME_SELECTOR: &str = ".file-name";
pub const FILE_INSTRUCTION_SELECTOR: &str = ".file-instruction";
pub const FILE_ICON_SELECTOR: &str = "i";
pub const FILE_SELECTED_ICON_CLASS: &str = "fas fa-file-csv";
pub const FILE_NAME_COLOR: &str = "#dc143c";

pub const VALIDATED_CLASS: &str = "was-validated";
pub const ACTIVE_CLASS: &str = "active";
pub const NOTIFICATION_ID_ATTR: &str = "data-notification-id";

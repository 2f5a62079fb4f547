/// Sentinel category id rendered for files whose category was deleted or
/// never set
pub const UNCATEGORIZED_ID: i32 = 0;

/// Label rendered alongside the sentinel id
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Categories seeded at startup when the table is empty
pub const DEFAULT_CATEGORIES: [&str; 3] = ["General", "Documents", "Media"];

/// Categories offered by the request form.
///
/// Suggestions only. The stored `category` is free text and is never checked
/// against this list.
pub const KNOWN_CATEGORIES: [&str; 6] = [
    "Physics",
    "Chemistry",
    "Biology",
    "Electronics",
    "Robotics",
    "Environmental",
];

use hashbrown::HashMap as FastHashMap;

/// Capture key to matched value. Unnamed segments use `$0`, `$1`, ... in pattern order.
pub type Captures = FastHashMap<String, String>;

//! Error macros for wayfind

/// Macro for returning an invalid reference error when a handle is foreign
#[macro_export]
macro_rules! ensure_owned {
    ($graph:expr, $node:expr) => {
        if !$graph.contains($node) {
            return Err($crate::error::WayfindError::invalid_reference(format!(
                "node {}",
                $node
            )));
        }
    };
}

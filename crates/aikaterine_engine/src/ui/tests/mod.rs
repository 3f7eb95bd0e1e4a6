//! Tree-level scenarios spanning construction, description loading and teardown

// Report pipeline: free-form analysis text -> classified sections -> HTML.
// Both steps are pure; the parser is total over all input strings.

pub mod parser;
pub mod render;

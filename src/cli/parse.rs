use algotrace_core::format::OutputFormat;
use algotrace_core::graph::MstAlgorithm;
use algotrace_core::model::EdgeSpec;
use algotrace_core::sort::SortAlgorithm;

/// Parse an inline edge (`0-1:4`, `0>1:4`)
pub fn parse_edge_spec(s: &str) -> std::result::Result<EdgeSpec, String> {
    s.parse::<EdgeSpec>().map_err(|e| e.to_string())
}

/// Parse MST algorithm name
pub fn parse_mst_algorithm(s: &str) -> std::result::Result<MstAlgorithm, String> {
    s.parse::<MstAlgorithm>().map_err(|e| e.to_string())
}

/// Parse sort algorithm name
pub fn parse_sort_algorithm(s: &str) -> std::result::Result<SortAlgorithm, String> {
    s.parse::<SortAlgorithm>().map_err(|e| e.to_string())
}

/// Parse output format name
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

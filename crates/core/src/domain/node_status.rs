// Node Status Report
// `riak-admin status` prints `key : value` lines

use std::collections::BTreeMap;

/// key -> value, both trimmed
pub type StatusReport = BTreeMap<String, String>;

/// Parse `status` stdout
///
/// Every line containing `:` is split once on the first colon. Later
/// duplicates overwrite earlier ones. Lines without a colon are ignored.
pub fn parse_status(stdout: &str) -> StatusReport {
    stdout
        .lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_key_and_value() {
        let report = parse_status("ring_creation_size : 64\n");

        assert_eq!(report.len(), 1);
        assert_eq!(report["ring_creation_size"], "64");
    }

    #[test]
    fn test_split_on_first_colon_only() {
        let report = parse_status(
            "nodename : 'riak@127.0.0.1'\nsys_system_version : Erlang R16B02 [smp:8:8]\n",
        );

        assert_eq!(report["nodename"], "'riak@127.0.0.1'");
        assert_eq!(report["sys_system_version"], "Erlang R16B02 [smp:8:8]");
    }

    #[test]
    fn test_lines_without_colon_are_ignored() {
        let report = parse_status("1-minute stats for 'riak@127.0.0.1'\n-----\nvnode_gets : 0\n");

        assert_eq!(report.len(), 1);
        assert_eq!(report["vnode_gets"], "0");
    }

    #[test]
    fn test_last_duplicate_wins() {
        let report = parse_status("vnode_gets : 1\nvnode_gets : 2\n");
        assert_eq!(report["vnode_gets"], "2");
    }

    #[test]
    fn test_empty_value_and_empty_output() {
        assert!(parse_status("").is_empty());

        let report = parse_status("storage_backend :\n");
        assert_eq!(report["storage_backend"], "");
    }
}

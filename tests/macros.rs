/// Parse, panicking with the input attached on failure.
#[macro_export]
macro_rules! parse {
    ($input:expr) => {
        sedge::parse($input).unwrap_or_else(|e| panic!("failed to parse {:?}: {}", $input, e))
    };
}

/// Match a node against a kind pattern, returning the bound fields.
#[macro_export]
macro_rules! unwrap_node {
    ($node:expr, $pat:pat => $out:expr) => {
        match &$node.kind {
            $pat => $out,
            other => panic!("unexpected node kind: {:?}", other),
        }
    };
}

/// Verify the first line of the error display (the message itself).
#[macro_export]
macro_rules! assert_err {
    ($err:literal, $input:expr) => {
        match sedge::parse($input) {
            Ok(..) => panic!("did not fail on {:?}", $input),
            Err(e) => assert_eq!(
                $err,
                e.to_string()
                    .chars()
                    .take_while(|c| *c != '\n')
                    .collect::<String>()
                    .as_str()
            ),
        }
    };
}

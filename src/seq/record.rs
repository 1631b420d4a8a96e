// A record for sequences, consisting of some description and a raw sequence. Only the raw
// sequence ends up in the comparison form.

#[derive(Debug, Clone, PartialEq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}

use crate::config::{PhonologyConfig, PHONE_JOINER};

/// Splits an intervocalic consonant cluster into `(coda, onset)`.
///
/// Suffixes are tried from the whole cluster down to a single phone; the first one that
/// is a declared onset becomes the onset of the following syllable. Without a match the
/// whole cluster stays in the coda.
pub fn split_cluster<'a>(
    cluster: &'a [String],
    phonology: &PhonologyConfig,
) -> (&'a [String], &'a [String]) {
    for onset_len in (1..=cluster.len()).rev() {
        let at = cluster.len() - onset_len;
        if phonology.is_onset(&cluster[at..]) {
            tracing::trace!(
                cluster = cluster.join(PHONE_JOINER),
                onset_len,
                "syllabification: onset split"
            );
            return cluster.split_at(at);
        }
    }
    (cluster, &cluster[cluster.len()..])
}

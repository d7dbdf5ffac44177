use crate::config::PhonologyConfig;
use crate::error::SyllabificationFailure;
use crate::types::Syllable;

mod onset_split;
#[cfg(test)]
mod tests;

pub use onset_split::split_cluster;

/// Success with the span's syllables, or the reason the span cannot be syllabified.
pub type SyllabificationResult = Result<Vec<Syllable>, SyllabificationFailure>;

/// Partitions `phones` into syllables by the Maximum Onset Principle.
///
/// Every vowel is a nucleus. Phones before the first vowel open the first syllable and
/// phones after the last vowel close the last one; each cluster between two vowels is
/// split so that its longest suffix forming a declared onset opens the next syllable.
///
/// Returns no syllables when `phones` has no vowel. Concatenating the returned
/// syllables' phones reproduces `phones`.
pub fn syllabify(phones: &[String], phonology: &PhonologyConfig) -> SyllabificationResult {
    if let Some(phone) = phones.iter().find(|ph| !phonology.contains(ph)) {
        return Err(SyllabificationFailure::UnknownPhone {
            phone: phone.clone(),
        });
    }

    let nuclei = phones
        .iter()
        .enumerate()
        .filter(|(_, ph)| phonology.is_vowel(ph))
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();
    let Some(&first) = nuclei.first() else {
        return Ok(Vec::new());
    };

    let mut syllables = Vec::with_capacity(nuclei.len());
    let mut onset = &phones[..first];
    for (k, &nucleus) in nuclei.iter().enumerate() {
        let (coda, next_onset) = match nuclei.get(k + 1) {
            Some(&next) => split_cluster(&phones[nucleus + 1..next], phonology),
            None => (&phones[nucleus + 1..], &phones[phones.len()..]),
        };
        syllables.push(Syllable {
            onset: onset.to_vec(),
            nucleus: phones[nucleus].clone(),
            coda: coda.to_vec(),
        });
        onset = next_onset;
    }

    check_coverage(&syllables, phones.len())?;
    Ok(syllables)
}

/// Verifies that `syllables` account for exactly `expected` phones.
pub fn check_coverage(
    syllables: &[Syllable],
    expected: usize,
) -> Result<(), SyllabificationFailure> {
    let covered = syllables.iter().map(Syllable::len).sum::<usize>();
    if covered != expected {
        return Err(SyllabificationFailure::Inconsistent { covered, expected });
    }
    Ok(())
}

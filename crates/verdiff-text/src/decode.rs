use verdiff_types::{CompareError, CompareResult, UnitLabel};

/// Decode raw page bytes into page texts.
///
/// The extraction collaborator hands over one byte buffer per page; pages
/// are expected to be UTF-8 text. Fails with
/// [`CompareError::ContentDecode`] naming the 1-based page of the first
/// buffer that is not.
pub fn decode_pages(raw_pages: &[Vec<u8>]) -> CompareResult<Vec<String>> {
    raw_pages
        .iter()
        .enumerate()
        .map(|(index, bytes)| {
            std::str::from_utf8(bytes)
                .map(str::to_string)
                .map_err(|e| CompareError::ContentDecode {
                    unit: UnitLabel::page(index + 1),
                    offset: e.valid_up_to(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_text_pages() {
        let pages = decode_pages(&[b"Hello".to_vec(), b"World".to_vec()]).unwrap();
        assert_eq!(pages, vec!["Hello", "World"]);
    }

    #[test]
    fn empty_input_decodes_to_no_pages() {
        assert!(decode_pages(&[]).unwrap().is_empty());
    }

    #[test]
    fn binary_page_fails_with_page_number() {
        let err = decode_pages(&[b"ok".to_vec(), vec![0xFF, 0x00]]).unwrap_err();
        match err {
            CompareError::ContentDecode { unit, offset } => {
                assert_eq!(unit, UnitLabel::page(2));
                assert_eq!(offset, 0);
            }
            other => panic!("expected ContentDecode, got {other:?}"),
        }
    }
}

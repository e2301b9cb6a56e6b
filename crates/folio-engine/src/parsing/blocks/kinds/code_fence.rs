/// What a fence line carries: the info string, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub info: Option<String>,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Detects a fence on a line that has already been trimmed.
    pub fn sig(trimmed: &str) -> Option<FenceSig> {
        let info = trimmed.strip_prefix(Self::BACKTICKS)?.trim();
        Some(FenceSig {
            info: (!info.is_empty()).then(|| info.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_bare_fence() {
        assert_eq!(CodeFence::sig("```"), Some(FenceSig { info: None }));
    }

    #[test]
    fn detect_fence_with_info() {
        assert_eq!(
            CodeFence::sig("``` rust "),
            Some(FenceSig {
                info: Some("rust".into())
            })
        );
    }

    #[test]
    fn longer_fence_still_detected() {
        assert_eq!(CodeFence::sig("````"), Some(FenceSig { info: Some("`".into()) }));
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello"), None);
        assert_eq!(CodeFence::sig("``inline``"), None);
        assert_eq!(CodeFence::sig("~~~"), None);
    }
}

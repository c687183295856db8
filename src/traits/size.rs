//! Size tokens and their per-family class names

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Size {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "xs" => Some(Self::Xs),
            "sm" | "small" => Some(Self::Sm),
            "md" | "medium" => Some(Self::Md),
            "lg" | "large" => Some(Self::Lg),
            "xl" => Some(Self::Xl),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeFamily {
    Button,
    ButtonGroup,
    FormControl,
    FormSelect,
    Pagination,
    Modal,
    SpinnerBorder,
    SpinnerGrow,
    Placeholder,
}

impl SizeFamily {
    fn prefix(&self) -> &'static str {
        match self {
            Self::Button => "btn",
            Self::ButtonGroup => "btn-group",
            Self::FormControl => "form-control",
            Self::FormSelect => "form-select",
            Self::Pagination => "pagination",
            Self::Modal => "modal",
            Self::SpinnerBorder => "spinner-border",
            Self::SpinnerGrow => "spinner-grow",
            Self::Placeholder => "placeholder",
        }
    }

    pub fn supports(&self, size: Size) -> bool {
        match self {
            Self::Modal => matches!(size, Size::Sm | Size::Lg | Size::Xl),
            Self::SpinnerBorder | Self::SpinnerGrow => size == Size::Sm,
            Self::Placeholder => matches!(size, Size::Xs | Size::Sm | Size::Lg),
            _ => matches!(size, Size::Sm | Size::Lg),
        }
    }

    /// Class for a size; unsupported pairs yield `None`
    pub fn class(&self, size: Option<Size>) -> Option<String> {
        let size = size?;
        if !self.supports(size) {
            return None;
        }
        Some(format!("{}-{}", self.prefix(), size.as_str()))
    }

    pub fn class_for(&self, size: Option<&str>) -> Option<String> {
        self.class(size.and_then(Size::parse))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_sizes() {
        assert_eq!(SizeFamily::Button.class_for(Some("sm")).as_deref(), Some("btn-sm"));
        assert_eq!(SizeFamily::Button.class_for(Some("lg")).as_deref(), Some("btn-lg"));
        assert_eq!(SizeFamily::Button.class_for(Some("xl")), None);
        assert_eq!(SizeFamily::Button.class_for(None), None);
    }

    #[test]
    fn test_modal_sizes() {
        assert_eq!(SizeFamily::Modal.class_for(Some("xl")).as_deref(), Some("modal-xl"));
        assert_eq!(SizeFamily::Modal.class_for(Some("md")), None);
    }

    #[test]
    fn test_form_and_spinner_sizes() {
        assert_eq!(
            SizeFamily::FormControl.class_for(Some("LG")).as_deref(),
            Some("form-control-lg")
        );
        assert_eq!(
            SizeFamily::SpinnerGrow.class_for(Some("sm")).as_deref(),
            Some("spinner-grow-sm")
        );
        assert_eq!(SizeFamily::SpinnerBorder.class_for(Some("lg")), None);
    }

    #[test]
    fn test_unknown_size_yields_nothing() {
        assert_eq!(SizeFamily::Pagination.class_for(Some("huge")), None);
    }
}

mod styled_button;

pub use styled_button::StyledButton;

pub mod icons;
pub mod member_card;
pub mod member_form;
pub mod motion;

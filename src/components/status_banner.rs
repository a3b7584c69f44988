use yew::prelude::*;
use crate::stores::SubmissionState;
use crate::utils::i18n::{t, Language};

#[derive(Properties, PartialEq, Clone)]
pub struct StatusBannerProps {
    pub submission: SubmissionState,
    pub language: Language,
}

#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    let lang = props.language;
    match &props.submission {
        SubmissionState::Idle => html! {},
        SubmissionState::Submitting => html! {
            <p class="status-banner loading">{t("loading", lang)}</p>
        },
        SubmissionState::Succeeded => html! {
            <p class="status-banner success">{t("success_message", lang)}</p>
        },
        SubmissionState::Failed(error) => html! {
            <p class="status-banner error" title={error.to_string()}>
                {error.user_message(lang)}
            </p>
        },
    }
}

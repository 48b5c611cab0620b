// ============================================================================
// LOGIN VIEW - Enlaza el formulario existente con LoginViewModel
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlButtonElement};
use crate::config::AppConfig;
use crate::dom::{
    focus, get_element_by_id, input_by_id, on_input, on_submit, query_selector, set_text_by_id,
    set_text_content, set_visible,
};
use crate::services::{BrowserStorage, SessionStore, SimulatedAuth, WindowNavigator};
use crate::state::{LoginCopy, LoginView};
use crate::utils::constants::*;
use crate::viewmodels::{LoginOutcome, LoginViewModel};

type BrowserLoginViewModel = LoginViewModel<BrowserStorage, SimulatedAuth, WindowNavigator>;

/// Montar `#loginForm`. El markup es el render inicial; cada cambio de
/// estado re-renderiza desde [`LoginView`].
pub fn mount_login(form: &Element, config: &AppConfig) -> Result<(), JsValue> {
    log::info!("🎬 [LOGIN] Montando formulario de login");

    // localStorage se abre recién al guardar la sesión
    let vm: Rc<BrowserLoginViewModel> = Rc::new(LoginViewModel::new(
        SessionStore::new(BrowserStorage::new()),
        SimulatedAuth::from_config(config),
        WindowNavigator::new(config.clone()),
    ));

    let copy = LoginCopy::default().with_markup(
        get_element_by_id(HELPER_TEXT_ID).and_then(|e| e.text_content()),
        query_selector(LOGIN_BUTTON_SELECTOR).and_then(|e| e.text_content()),
    );
    vm.state().subscribe(move |state| {
        if let Err(e) = render_login(&LoginView::from_state(state, &copy)) {
            log::error!("❌ [LOGIN] Error renderizando: {:?}", e);
        }
    });

    if let Some(mobile_input) = input_by_id(MOBILE_INPUT_ID) {
        let vm = vm.clone();
        let target = mobile_input.clone();
        on_input(&mobile_input, move |_| {
            let digits = vm.on_mobile_input(&target.value());
            if digits != target.value() {
                target.set_value(&digits);
            }
        })?;
    }

    {
        let vm = vm.clone();
        on_submit(form, move |e| {
            e.prevent_default();

            let mobile = input_by_id(MOBILE_INPUT_ID).map(|i| i.value()).unwrap_or_default();
            let otp = input_by_id(OTP_INPUT_ID).map(|i| i.value()).unwrap_or_default();

            if let Some(pending) = vm.submit(&mobile, &otp) {
                let vm = vm.clone();
                spawn_local(async move {
                    match vm.complete(pending).await {
                        Ok(LoginOutcome::LoggedIn(_)) | Ok(LoginOutcome::Rejected) => {}
                        Err(e) => log::error!("❌ [LOGIN] {}", e),
                    }
                });
            }
        })?;
    }

    Ok(())
}

fn render_login(view: &LoginView) -> Result<(), JsValue> {
    if let Some(group) = get_element_by_id(MOBILE_GROUP_ID) {
        set_visible(&group, view.show_mobile_group, "flex")?;
    }
    if let Some(group) = get_element_by_id(OTP_GROUP_ID) {
        set_visible(&group, view.show_otp_group, "flex")?;
    }

    set_text_by_id(MOBILE_ERROR_ID, &view.mobile_error);
    set_text_by_id(OTP_ERROR_ID, &view.otp_error);
    set_text_by_id(HELPER_TEXT_ID, &view.helper_text);

    if let Some(button) = query_selector(LOGIN_BUTTON_SELECTOR) {
        set_text_content(&button, &view.button_label);
        if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(view.button_disabled);
        }
    }

    if view.focus_otp {
        if let Some(otp) = get_element_by_id(OTP_INPUT_ID) {
            focus(&otp)?;
        }
    }

    Ok(())
}

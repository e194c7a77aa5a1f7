//! In-browser tests for the page bindings.
//!
//! Each test installs its own fixture under `<body>`, binds the page, drives
//! it with synthetic events, and removes the fixture again. Dropping the
//! returned `PageBindings` detaches the listeners, so fixtures stay isolated.

#![cfg(target_arch = "wasm32")]

use agenda_pages::{BindError, BindOptions, PageBindings};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

/// Mounts `html` under the body and returns the wrapper element.
fn install_fixture(html: &str) -> Element {
	let document = document();
	let root = document.create_element("div").unwrap();
	root.set_inner_html(html);
	document.body().unwrap().append_child(&root).unwrap();
	root
}

fn query(selector: &str) -> Element {
	document().query_selector(selector).unwrap().unwrap()
}

fn input(selector: &str) -> HtmlInputElement {
	query(selector).dyn_into().unwrap()
}

fn click(element: &Element) {
	element.dispatch_event(&Event::new("click").unwrap()).unwrap();
}

fn fire(element: &Element, event: &str) {
	element.dispatch_event(&Event::new(event).unwrap()).unwrap();
}

/// Replaces `window.alert` with a no-op so the date guard can fire headless.
fn silence_alerts() {
	js_sys::eval("window.alert = function () {};").unwrap();
}

#[wasm_bindgen_test]
fn selecting_a_second_slot_moves_the_marker() {
	let fixture = install_fixture(
		r#"
		<input type="hidden" id="hora">
		<button class="horario-btn" data-hora="09:00">09:00</button>
		<button class="horario-btn" data-hora="10:00">10:00</button>
		"#,
	);
	let bindings = PageBindings::bind(&document(), &BindOptions::default()).unwrap();

	let buttons = document().query_selector_all(".horario-btn").unwrap();
	let first: Element = buttons.item(0).unwrap().dyn_into().unwrap();
	let second: Element = buttons.item(1).unwrap().dyn_into().unwrap();

	click(&first);
	assert_eq!(input("#hora").value(), "09:00");
	assert!(first.class_list().contains("selecionado"));

	click(&second);
	assert_eq!(input("#hora").value(), "10:00");
	assert!(!first.class_list().contains("selecionado"));
	assert!(second.class_list().contains("selecionado"));

	drop(bindings);
	fixture.remove();
}

#[wasm_bindgen_test]
fn reselecting_the_same_slot_is_idempotent() {
	let fixture = install_fixture(
		r#"
		<input type="hidden" id="hora">
		<button class="horario-btn" data-hora="09:00">09:00</button>
		"#,
	);
	let bindings = PageBindings::bind(&document(), &BindOptions::default()).unwrap();

	let button = query(".horario-btn");
	click(&button);
	click(&button);

	assert_eq!(input("#hora").value(), "09:00");
	assert!(button.class_list().contains("selecionado"));

	drop(bindings);
	fixture.remove();
}

#[wasm_bindgen_test]
fn slot_value_falls_back_to_button_text() {
	let fixture = install_fixture(
		r#"
		<input type="hidden" id="hora">
		<button class="horario-btn"> 11:30 </button>
		"#,
	);
	let bindings = PageBindings::bind(&document(), &BindOptions::default()).unwrap();

	click(&query(".horario-btn"));
	assert_eq!(input("#hora").value(), "11:30");

	drop(bindings);
	fixture.remove();
}

#[wasm_bindgen_test]
fn upload_form_toggles_and_toggles_back() {
	let fixture = install_fixture(
		r#"
		<button class="toggle-upload">enviar foto</button>
		<div id="form-upload" style="display: none;"></div>
		"#,
	);
	let bindings = PageBindings::bind(&document(), &BindOptions::default()).unwrap();

	let control = query(".toggle-upload");
	let container: HtmlElement = query("#form-upload").dyn_into().unwrap();

	click(&control);
	assert_eq!(container.style().get_property_value("display").unwrap(), "block");

	click(&control);
	assert_eq!(container.style().get_property_value("display").unwrap(), "none");

	drop(bindings);
	fixture.remove();
}

#[wasm_bindgen_test]
fn date_field_gets_today_as_minimum() {
	let fixture = install_fixture(r#"<input type="date" name="data">"#);
	let bindings = PageBindings::bind(&document(), &BindOptions::default()).unwrap();

	let now = js_sys::Date::new_0();
	let expected = agenda_pages::format_iso_date(
		now.get_full_year(),
		now.get_month() + 1,
		now.get_date(),
	);
	assert_eq!(input("input[type=\"date\"]").min(), expected);

	drop(bindings);
	fixture.remove();
}

#[wasm_bindgen_test]
fn past_date_is_cleared_on_change() {
	silence_alerts();
	let fixture = install_fixture(r#"<input type="date" name="data">"#);
	let bindings = PageBindings::bind(&document(), &BindOptions::default()).unwrap();

	let field = input("input[type=\"date\"]");
	field.set_value("2000-01-01");
	fire(&field, "change");
	assert_eq!(field.value(), "");

	drop(bindings);
	fixture.remove();
}

#[wasm_bindgen_test]
fn today_and_future_dates_survive_the_change_handler() {
	silence_alerts();
	let fixture = install_fixture(r#"<input type="date" name="data">"#);
	let bindings = PageBindings::bind(&document(), &BindOptions::default()).unwrap();

	let field = input("input[type=\"date\"]");
	let today = field.min();
	field.set_value(&today);
	fire(&field, "change");
	assert_eq!(field.value(), today);

	field.set_value("2999-12-31");
	fire(&field, "change");
	assert_eq!(field.value(), "2999-12-31");

	drop(bindings);
	fixture.remove();
}

#[wasm_bindgen_test]
fn phone_field_reformats_on_input() {
	let fixture = install_fixture(r#"<input type="tel" name="telefone">"#);
	let bindings = PageBindings::bind(&document(), &BindOptions::default()).unwrap();

	let field = input("input[name=\"telefone\"]");
	field.set_value("11a98765x4321");
	fire(&field, "input");
	assert_eq!(field.value(), "(11) 98765-4321");

	field.set_value("1198765");
	fire(&field, "input");
	assert_eq!(field.value(), "(11) 9876-5");

	field.set_value("11");
	fire(&field, "input");
	assert_eq!(field.value(), "11");

	drop(bindings);
	fixture.remove();
}

#[wasm_bindgen_test]
fn password_toggle_flips_type_and_marker() {
	let fixture = install_fixture(
		r#"
		<input type="password" name="senha">
		<span class="toggle-password"></span>
		"#,
	);
	let bindings = PageBindings::bind(&document(), &BindOptions::default()).unwrap();

	let field = input("input[name=\"senha\"]");
	let control = query(".toggle-password");

	click(&control);
	assert_eq!(field.type_(), "text");
	assert!(control.class_list().contains("mostrando"));

	click(&control);
	assert_eq!(field.type_(), "password");
	assert!(!control.class_list().contains("mostrando"));

	drop(bindings);
	fixture.remove();
}

#[wasm_bindgen_test]
fn lenient_bind_skips_missing_elements() {
	let fixture = install_fixture(
		r#"
		<input type="hidden" id="hora">
		<button class="horario-btn" data-hora="09:00">09:00</button>
		<button class="horario-btn" data-hora="10:00">10:00</button>
		"#,
	);
	let bindings = PageBindings::bind(&document(), &BindOptions::default()).unwrap();

	// Two slot buttons and nothing else on the page.
	assert_eq!(bindings.len(), 2);

	drop(bindings);
	fixture.remove();
}

#[wasm_bindgen_test]
fn strict_bind_requires_the_hour_field() {
	let fixture = install_fixture(r#"<button class="horario-btn">09:00</button>"#);

	let err = PageBindings::bind(&document(), &BindOptions::strict()).unwrap_err();
	assert_eq!(
		err,
		BindError::MissingElement {
			selector: "#hora".to_string(),
		}
	);

	let lenient = PageBindings::bind(&document(), &BindOptions::default()).unwrap();
	assert!(lenient.is_empty());

	drop(lenient);
	fixture.remove();
}

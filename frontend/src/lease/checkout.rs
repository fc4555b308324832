use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::error::WidgetError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutItem {
    #[serde(rename = "priceId")]
    pub price_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutOptions {
    pub items: Vec<CheckoutItem>,
}

impl CheckoutOptions {
    pub fn single(price_id: &str) -> Self {
        Self {
            items: vec![CheckoutItem {
                price_id: price_id.to_string(),
                quantity: 1,
            }],
        }
    }
}

/// Third-party checkout overlay. It owns its UI and completion callback;
/// we only ask it to open.
pub trait PaymentWidget {
    fn open_checkout(&self, options: &CheckoutOptions) -> Result<(), WidgetError>;
}

/// Shared handle to the widget created at start-up, handed down through context.
#[derive(Clone)]
pub struct WidgetHandle(Rc<dyn PaymentWidget>);

impl WidgetHandle {
    pub fn new(widget: impl PaymentWidget + 'static) -> Self {
        Self(Rc::new(widget))
    }
}

impl PartialEq for WidgetHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Opens the hosted checkout for one unit of `price_id`.
pub fn open_hosted_checkout(widget: Option<&WidgetHandle>, price_id: &str) -> Result<(), WidgetError> {
    let widget = widget.ok_or(WidgetError::Unavailable)?;
    widget.0.open_checkout(&CheckoutOptions::single(price_id))
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Paddle, js_name = Initialize)]
    fn paddle_initialize(options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["Paddle", "Checkout"], js_name = open)]
    fn paddle_checkout_open(options: &JsValue) -> Result<(), JsValue>;
}

#[derive(Serialize)]
struct PaddleInit<'a> {
    token: &'a str,
}

/// Paddle.js, loaded by a script tag in `index.html`.
pub struct PaddleWidget {
    ready: bool,
}

impl PaddleWidget {
    pub fn initialize(token: Option<&str>) -> Self {
        let Some(token) = token else {
            log::warn!("PADDLE_CLIENT_TOKEN not set, hosted checkout disabled");
            return Self { ready: false };
        };
        let ready = match serde_wasm_bindgen::to_value(&PaddleInit { token }) {
            Ok(options) => match paddle_initialize(&options) {
                Ok(()) => true,
                Err(e) => {
                    log::error!("Paddle.Initialize failed: {:?}", e);
                    false
                }
            },
            Err(e) => {
                log::error!("Failed to build Paddle options: {}", e);
                false
            }
        };
        Self { ready }
    }
}

impl PaymentWidget for PaddleWidget {
    fn open_checkout(&self, options: &CheckoutOptions) -> Result<(), WidgetError> {
        if !self.ready {
            return Err(WidgetError::Unavailable);
        }
        let options = serde_wasm_bindgen::to_value(options)
            .map_err(|e| WidgetError::Failed(e.to_string()))?;
        paddle_checkout_open(&options).map_err(|e| WidgetError::Failed(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingWidget {
        opened: Rc<RefCell<Vec<CheckoutOptions>>>,
    }

    impl PaymentWidget for RecordingWidget {
        fn open_checkout(&self, options: &CheckoutOptions) -> Result<(), WidgetError> {
            self.opened.borrow_mut().push(options.clone());
            Ok(())
        }
    }

    #[test]
    fn opens_one_unit_of_the_catalog_item() {
        let opened = Rc::new(RefCell::new(Vec::new()));
        let handle = WidgetHandle::new(RecordingWidget {
            opened: opened.clone(),
        });
        open_hosted_checkout(Some(&handle), "pri_test").unwrap();

        let opened = opened.borrow();
        assert_eq!(opened.len(), 1);
        assert_eq!(
            opened[0].items,
            vec![CheckoutItem {
                price_id: "pri_test".to_string(),
                quantity: 1
            }]
        );
    }

    #[test]
    fn options_serialize_with_paddle_field_names() {
        let json = serde_json::to_value(CheckoutOptions::single("pri_x")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "items": [{ "priceId": "pri_x", "quantity": 1 }] })
        );
    }

    #[test]
    fn missing_widget_is_unavailable() {
        assert_eq!(
            open_hosted_checkout(None, "pri_x"),
            Err(WidgetError::Unavailable)
        );
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = WidgetHandle::new(RecordingWidget::default());
        let b = WidgetHandle::new(RecordingWidget::default());
        assert!(a == a.clone());
        assert!(a != b);
    }
}

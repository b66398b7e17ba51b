// tests/support/mocks/util.rs
use async_trait::async_trait;
use fastfeet_api::application::{
    ApplicationResult,
    ports::{
        media::{ImageUpload, ImageValidator},
        notification::{Notification, NotificationDispatcher},
        tracking::TrackingCodeGenerator,
    },
};
use fastfeet_api::domain::order::TrackingCode;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// どんな画像でも受け付けるバリデータ
pub struct AcceptAllImages;

#[async_trait]
impl ImageValidator for AcceptAllImages {
    async fn validate(&self, _image: &ImageUpload) -> ApplicationResult<()> {
        Ok(())
    }
}

/// 送信された通知を記録するだけのディスパッチャ
#[derive(Default)]
pub struct CapturingDispatcher {
    sent: Mutex<Vec<Notification>>,
}

impl CapturingDispatcher {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

impl NotificationDispatcher for CapturingDispatcher {
    fn dispatch(&self, notification: Notification) {
        self.sent.lock().unwrap().push(notification);
    }
}

/// 連番 UUID を追跡コードとして払い出す
#[derive(Default)]
pub struct SequentialTrackingCodes {
    next: AtomicU64,
}

impl TrackingCodeGenerator for SequentialTrackingCodes {
    fn next_code(&self) -> TrackingCode {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        TrackingCode::new(Uuid::from_u128(u128::from(n)))
    }
}

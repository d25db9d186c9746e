//! 弹窗消息处理

use crate::message::ModalMessage;
use crate::model::{App, Modal};

pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => app.modal.close(),
        ModalMessage::Confirm => {
            // 摘要弹窗确认即提交并退出，其余弹窗确认等同关闭
            if let Some(Modal::Summary { ids, .. }) = app.modal.active.take() {
                log::info!("location submitted: {ids:?}");
                app.submitted = Some(ids);
                app.should_quit = true;
            }
        }
    }
}

// 関数レスポンスのエンベロープ
//
// ホスティングランタイムの統合層（API Gatewayなど）が期待する
// {statusCode, body} 形式のレスポンスを表す。

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 成功時のステータスコード
///
/// この関数が返すステータスは常にこの値のみ。
const STATUS_OK: u16 = 200;

/// body に文字列化して格納するドキュメント
///
/// フィールド宣言順（event → result）でシリアライズされる。
#[derive(Serialize)]
struct ResponseBody<'a> {
    event: &'a Value,
    result: &'a Value,
}

/// Lambda関数のレスポンス
///
/// `{"statusCode": 200, "body": "{\"event\":...,\"result\":...}"}` の形で
/// シリアライズされる。bodyはJSONオブジェクトではなくJSON文字列。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    /// HTTPステータスコード
    pub status_code: u16,
    /// event と result を含むJSON文字列
    pub body: String,
}

impl FunctionResponse {
    /// 成功レスポンスを作成
    ///
    /// イベントとリモート取得結果を検証・加工せずにそのまま埋め込む。
    /// 同じ入力からは常にバイト単位で同一のbodyが得られる。
    ///
    /// # Arguments
    /// * `event` - 呼び出し時のイベント（nullを含む任意の値）
    /// * `result` - リモートエンドポイントから取得した本文
    pub fn ok(event: &Value, result: &Value) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(&ResponseBody { event, result })?;

        Ok(Self {
            status_code: STATUS_OK,
            body,
        })
    }

    /// bodyをJSONとしてパース
    #[cfg(test)]
    pub(crate) fn parse_body(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

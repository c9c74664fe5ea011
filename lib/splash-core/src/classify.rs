//! Response classification.
//!
//! Every response becomes exactly one [`ApiResult`]:
//!
//! | response                       | outcome                                  |
//! |--------------------------------|------------------------------------------|
//! | 2xx, handler succeeds          | `Success { status, response }`           |
//! | non-2xx, JSON body             | `Error { status, source, errors }`       |
//! | either path, decoding failure  | `Error { status, Decoding, [message] }`  |
//! | anything else                  | `Err(error)`, propagated to the caller   |

use tracing::{debug, warn};

use crate::{
    ApiResult, Error, ErrorClassifier, ErrorSource, HandleResponse, Response, Result,
    get_json_response,
};

/// Classify a raw response into an [`ApiResult`].
///
/// `handle_response` decodes 2xx bodies; `classifier` maps the JSON body of
/// other responses. Only [`Error::Decoding`] is folded into the result, with
/// the original status preserved.
pub async fn handle_fetch_response<T, H, C>(
    handle_response: &H,
    classifier: &C,
    response: Response,
) -> Result<ApiResult<T>>
where
    H: HandleResponse<T>,
    C: ErrorClassifier + ?Sized,
{
    let status = response.status();

    let outcome = if response.is_ok() {
        handle_response
            .handle(response)
            .await
            .map(|decoded| ApiResult::Success {
                status,
                response: decoded,
            })
    } else {
        get_json_response(&response).map(|json| {
            let (source, errors) = classifier.classify(status, &json);
            warn!(status, %source, ?errors, "API responded with an error");
            ApiResult::Error {
                status,
                source,
                errors,
            }
        })
    };

    match outcome {
        Ok(result) => Ok(result),
        Err(Error::Decoding(message)) => {
            debug!(status, %message, "recovered decoding failure");
            Ok(ApiResult::Error {
                status,
                source: ErrorSource::Decoding,
                errors: vec![message],
            })
        }
        Err(err) => Err(err),
    }
}

use async_trait::async_trait;
use tracing::debug;

use crate::api::{ApiClient, PostApi};
use crate::error::ApiResult;
use crate::models::{
    CommentedPostDto, LikedPostDto, MyPostsDto, NewPost, Post, PostDetail, PostDetailDto,
    RandomPostDto, ScrollPostDto,
};

/// Post operations.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create_post(&self, post: NewPost) -> ApiResult<()>;

    async fn update_post(&self, post_id: i64, title: &str, content: &str) -> ApiResult<()>;

    /// Mark a post completed.
    async fn update_post_state(&self, post_id: i64) -> ApiResult<()>;

    /// Fails with `EmptyResult` when the envelope carries no data.
    async fn get_post_detail(&self, post_id: i64) -> ApiResult<PostDetail>;

    /// Zero or one post; the server answers with a single object.
    async fn get_random_posts(&self) -> ApiResult<Vec<Post>>;

    async fn get_my_posts(&self) -> ApiResult<Vec<Post>>;

    /// One fixed-size page, no cursor.
    async fn get_liked_posts(&self) -> ApiResult<Vec<Post>>;

    /// Cursor page of open posts. An empty page means the end of the list.
    async fn get_ing_posts(&self, page_size: u32, last_post_id: Option<i64>)
        -> ApiResult<Vec<Post>>;

    /// Cursor page of completed posts.
    async fn get_done_posts(
        &self,
        page_size: u32,
        last_post_id: Option<i64>,
    ) -> ApiResult<Vec<Post>>;

    async fn get_commented_posts(&self) -> ApiResult<Vec<Post>>;

    async fn delete_post(&self, post_id: i64) -> ApiResult<()>;
}

/// [`PostRepository`] backed by the REST API.
#[derive(Debug, Clone)]
pub struct HttpPostRepository {
    api: ApiClient,
    liked_page_size: u32,
}

impl HttpPostRepository {
    pub fn new(api: ApiClient, liked_page_size: u32) -> Self {
        Self {
            api,
            liked_page_size,
        }
    }

    async fn list<D>(&self, call: PostApi) -> ApiResult<Vec<Post>>
    where
        D: serde::de::DeserializeOwned + Into<Post> + Send,
    {
        let operation = call.operation();
        let posts: Vec<Post> = self
            .api
            .fetch::<Vec<D>>(&call.endpoint(), operation)
            .await?
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect();
        debug!(operation, count = posts.len(), "Fetched posts");
        Ok(posts)
    }
}

#[async_trait]
impl PostRepository for HttpPostRepository {
    async fn create_post(&self, post: NewPost) -> ApiResult<()> {
        self.api.execute(&PostApi::Create(post).endpoint()).await
    }

    async fn update_post(&self, post_id: i64, title: &str, content: &str) -> ApiResult<()> {
        let call = PostApi::Update {
            post_id,
            title: title.to_string(),
            content: content.to_string(),
        };
        self.api.execute(&call.endpoint()).await
    }

    async fn update_post_state(&self, post_id: i64) -> ApiResult<()> {
        self.api
            .execute(&PostApi::Complete { post_id }.endpoint())
            .await
    }

    async fn get_post_detail(&self, post_id: i64) -> ApiResult<PostDetail> {
        let call = PostApi::Detail { post_id };
        let dto: PostDetailDto = self
            .api
            .fetch_required(&call.endpoint(), call.operation())
            .await?;
        Ok(dto.into())
    }

    async fn get_random_posts(&self) -> ApiResult<Vec<Post>> {
        let call = PostApi::Random;
        let dto: Option<RandomPostDto> =
            self.api.fetch(&call.endpoint(), call.operation()).await?;
        Ok(dto.map(Post::from).into_iter().collect())
    }

    async fn get_my_posts(&self) -> ApiResult<Vec<Post>> {
        let call = PostApi::My;
        let dto: Option<MyPostsDto> = self.api.fetch(&call.endpoint(), call.operation()).await?;
        let posts = dto.map(MyPostsDto::into_posts).unwrap_or_default();
        debug!(operation = call.operation(), count = posts.len(), "Fetched posts");
        Ok(posts)
    }

    async fn get_liked_posts(&self) -> ApiResult<Vec<Post>> {
        self.list::<LikedPostDto>(PostApi::Liked {
            page_size: self.liked_page_size,
        })
        .await
    }

    async fn get_ing_posts(
        &self,
        page_size: u32,
        last_post_id: Option<i64>,
    ) -> ApiResult<Vec<Post>> {
        self.list::<ScrollPostDto>(PostApi::Ing {
            page_size,
            last_post_id,
        })
        .await
    }

    async fn get_done_posts(
        &self,
        page_size: u32,
        last_post_id: Option<i64>,
    ) -> ApiResult<Vec<Post>> {
        self.list::<ScrollPostDto>(PostApi::Done {
            page_size,
            last_post_id,
        })
        .await
    }

    async fn get_commented_posts(&self) -> ApiResult<Vec<Post>> {
        self.list::<CommentedPostDto>(PostApi::Commented).await
    }

    async fn delete_post(&self, post_id: i64) -> ApiResult<()> {
        self.api
            .execute(&PostApi::Delete { post_id }.endpoint())
            .await
    }
}
